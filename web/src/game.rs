use crate::utils::*;
use clap::Args;
use gloo::timers::callback::Timeout;
use mnemo_core as game;
use game::{ConcealTicket, DeckGenerator, GameSession, Scheduler, ShuffledDeckGenerator, TileFace, TileId};
use yew::html::Scope;
use yew::prelude::*;

/// Runs flip-back timers on the browser event loop and reports back through the component.
pub(crate) struct TimeoutScheduler {
    link: Scope<GameView>,
}

impl TimeoutScheduler {
    fn new(link: Scope<GameView>) -> Self {
        Self { link }
    }
}

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule_once(&mut self, delay_ms: u32, ticket: ConcealTicket) -> Timeout {
        let link = self.link.clone();
        log::trace!("conceal scheduled in {}ms", delay_ms);
        Timeout::new(delay_ms, move || link.send_message(Msg::Conceal(ticket)))
    }

    fn cancel(&mut self, handle: Timeout) {
        drop(handle.cancel());
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Reveal(TileId),
    Conceal(ConcealTicket),
    NewGame,
}

fn face_label(face: TileFace) -> String {
    face.symbol()
        .map_or_else(|| "?".to_string(), |symbol| symbol.to_string())
}

fn face_classes(face: TileFace) -> Classes {
    match face {
        TileFace::Hidden => classes!("hidden"),
        TileFace::Revealed(_) => classes!("open"),
        TileFace::Matched(_) => classes!("open", "matched"),
    }
}

fn win_message(moves: game::MoveCount, score: game::Points) -> String {
    format!("You won in {} moves with a score of {}!", moves, score)
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    id: TileId,
    face: TileFace,
    #[prop_or_default]
    locked: bool,
    callback: Callback<TileId>,
}

#[function_component(TileCell)]
fn tile_component(props: &TileProps) -> Html {
    let TileProps {
        id,
        face,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!("tile", face_classes(face));
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("tile {} clicked", id);
        callback.emit(id);
    });

    html! {
        <td {class} {onclick}>{face_label(face)}</td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed for the first deal instead of random
    #[arg(short, long)]
    seed: Option<String>,

    /// Milliseconds a mismatched pair stays face up
    #[arg(long)]
    flip_delay: Option<u32>,
}

pub(crate) struct GameView {
    session: GameSession<TimeoutScheduler>,
}

impl GameView {
    fn deal(seed: u64) -> impl DeckGenerator {
        log::debug!("dealing with seed {:#018x}", seed);
        ShuffledDeckGenerator::new(seed)
    }

    fn reveal_tile(&mut self, id: TileId) -> bool {
        match self.session.reveal(id) {
            Ok(outcome) => {
                log::debug!("reveal {}: {:?}", id, outcome);
                outcome.has_update()
            }
            Err(err) => {
                log::error!("reveal {} rejected: {}", id, err);
                false
            }
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();

        let mut config = game::GameConfig::default();
        if let Some(delay) = props.flip_delay {
            config = config.with_flip_back_delay(delay);
        }
        let seed = props
            .seed
            .as_deref()
            .map_or_else(js_random_seed, seed_from_str);

        let scheduler = TimeoutScheduler::new(ctx.link().clone());
        Self {
            session: GameSession::new(config, scheduler, Self::deal(seed)),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Reveal(id) => self.reveal_tile(id),
            Conceal(ticket) => {
                let outcome = self.session.resolve_mismatch(ticket);
                log::debug!("conceal: {:?}", outcome);
                outcome.has_update()
            }
            NewGame => {
                self.session.new_game(Self::deal(js_random_seed()));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let snapshot = self.session.snapshot();
        let columns = self.session.config().columns;
        let locked = !snapshot.accepts_reveals();

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });
        let cb_reveal = ctx.link().callback(Msg::Reveal);

        html! {
            <div class="mnemo">
                <h1>{"Memory Game"}</h1>
                <nav>
                    <aside>
                        <small>{"Score"}</small>
                        <strong>{snapshot.score.to_string()}</strong>
                    </aside>
                    <aside>
                        <small>{"Moves"}</small>
                        <strong>{snapshot.moves.to_string()}</strong>
                    </aside>
                </nav>
                <table class={classes!("board", locked.then_some("locked"))}>
                    {
                        for snapshot.rows(columns).map(|row| html! {
                            <tr>
                                {
                                    for row.iter().map(|tile| {
                                        let callback = cb_reveal.clone();
                                        html! {
                                            <TileCell key={tile.id} id={tile.id} face={tile.face} {locked} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <footer>
                    <button onclick={cb_new_game.clone()}>{"New Game"}</button>
                </footer>
                <dialog open={snapshot.won}>
                    <article>
                        <h2>{"Congratulations!"}</h2>
                        <p>{win_message(snapshot.moves, snapshot.score)}</p>
                        <footer>
                            <button onclick={cb_new_game}>{"Play Again"}</button>
                        </footer>
                    </article>
                </dialog>
            </div>
        }
    }
}
