/// Single coordinate axis used for row/column counts and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Row-major iteration over every coordinate of a `rows × cols` grid.
pub fn iter_coords((rows, cols): Coord2) -> impl Iterator<Item = Coord2> {
    (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
}

/// The up to 8 Moore neighbors of `center` that lie inside a grid of `size`.
pub fn neighbors(center: Coord2, size: Coord2) -> impl Iterator<Item = Coord2> {
    let (row, col) = center;
    let (rows, cols) = size;
    (-1i8..=1)
        .flat_map(|d_row| (-1i8..=1).map(move |d_col| (d_row, d_col)))
        .filter(|&delta| delta != (0, 0))
        .filter_map(move |(d_row, d_col)| {
            let next = (row.checked_add_signed(d_row)?, col.checked_add_signed(d_col)?);
            (next.0 < rows && next.1 < cols).then_some(next)
        })
}
