use crate::grid::{ViewCell, ViewGrid};
use crate::utils::*;
use game::iter_coords;
use minefield_core as game;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Reveal(game::Coord2),
    ToggleFlag(game::Coord2),
    NewGame,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: game::Coord,
    col: game::Coord,
    cell: ViewCell,
    callback: Callback<Msg>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use ViewCell::*;

    let CellProps {
        row,
        col,
        cell,
        callback,
    } = props.clone();

    let class = classes!(
        "cell",
        match cell {
            Hidden => classes!(),
            Revealed(count) => classes!("revealed", format!("num-{}", count)),
            Flagged => classes!("flag"),
            Mine => classes!("revealed", "mine"),
            TriggeredMine => classes!("revealed", "mine", "oops"),
        }
    );

    let onclick = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| {
            log::trace!("({}, {}) click", row, col);
            callback.emit(Msg::Reveal((row, col)));
        })
    };

    let oncontextmenu = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        log::trace!("({}, {}) context menu", row, col);
        callback.emit(Msg::ToggleFlag((row, col)));
    });

    html! {
        <div {class} {onclick} {oncontextmenu}>{cell.label()}</div>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Seed of the first game, random when unset
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: game::GameSession,
    grid: ViewGrid,
}

impl GameView {
    fn new_session(seed: u64) -> game::GameSession {
        game::GameSession::new(game::GameConfig::DEFAULT, seed)
            .expect("default configuration is always valid")
    }

    fn reveal_cell(&mut self, coords: game::Coord2) -> bool {
        match self.session.reveal(coords, &mut self.grid) {
            Ok(Some(status)) => {
                if let Some(message) = self.grid.status().message() {
                    log::info!("{} ({:?})", message, status);
                }
                true
            }
            Ok(None) => false,
            Err(err) => {
                log::warn!("reveal {:?} rejected: {}", coords, err);
                false
            }
        }
    }

    fn toggle_flag(&mut self, coords: game::Coord2) -> bool {
        match self.session.toggle_flag(coords, &mut self.grid) {
            Ok(outcome) => outcome.is_some_and(game::FlagResult::has_update),
            Err(err) => {
                log::warn!("flag {:?} rejected: {}", coords, err);
                false
            }
        }
    }

    fn new_game(&mut self) {
        let seed = js_random_seed();
        log::debug!("new game, seed: {}", seed);
        self.session = Self::new_session(seed);
        self.grid = ViewGrid::new(self.session.board().size());
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        let session = Self::new_session(seed);
        let grid = ViewGrid::new(session.board().size());
        Self { session, grid }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Reveal(coords) => {
                log::debug!("reveal cell: {:?}", coords);
                self.reveal_cell(coords)
            }
            ToggleFlag(coords) => {
                log::debug!("flag cell: {:?}", coords);
                self.toggle_flag(coords)
            }
            NewGame => {
                self.new_game();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (rows, cols) = self.session.board().size();
        let status = self.grid.status();
        let is_playable = status == game::GameStatus::Playing;
        let style = format!("grid-template-columns: repeat({}, 30px)", cols);
        let callback = ctx.link().callback(|msg: Msg| msg);
        let cb_new_game = ctx.link().callback(|_: MouseEvent| Msg::NewGame);

        html! {
            <div class="minefield">
                <div id="grid" class={classes!("grid", is_playable.then_some("playable"))} {style}>
                    {
                        for iter_coords((rows, cols)).map(|(row, col)| {
                            let cell = self.grid.cell((row, col));
                            let callback = callback.clone();
                            html! {
                                <CellView {row} {col} {cell} {callback}/>
                            }
                        })
                    }
                </div>
                <button id="reset" onclick={cb_new_game}>{"Reset"}</button>
                <p id="message">{status.message().unwrap_or_default()}</p>
            </div>
        }
    }
}
