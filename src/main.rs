//! Rickdex - Rick and Morty character browser

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use rickdex::action::Action;
use rickdex::api::{CharacterApi, HttpCharacterApi};
use rickdex::components::{Browser, BrowserProps, Component, FilterMenu, FilterMenuProps};
use rickdex::config::{AppConfig, DEFAULT_API_URL, DEFAULT_FILTER_PAGE_CAP};
use rickdex::effect::Effect;
use rickdex::filters::collect_filter_options;
use rickdex::logging::init_tracing;
use rickdex::reducer::reducer;
use rickdex::state::{AppState, SKELETON_TICK_MS, Theme};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext, TaskKey,
};
use tui_dispatch_components::centered_rect;
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// Browse Rick and Morty characters in the terminal
#[derive(Parser, Debug)]
#[command(name = "rickdex")]
#[command(about = "Paged, filterable Rick and Morty character cards")]
struct Args {
    /// Character listing endpoint
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Most pages walked when collecting filter options (minimum 1)
    #[arg(
        long,
        default_value_t = DEFAULT_FILTER_PAGE_CAP as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    max_filter_pages: u64,

    /// Starting color theme
    #[arg(long, value_enum, default_value_t = Theme::Light)]
    theme: Theme,

    #[command(flatten)]
    debug: DebugCliArgs,
}

impl Args {
    fn config(&self) -> AppConfig {
        AppConfig {
            filter_page_cap: usize::try_from(self.max_filter_pages)
                .unwrap_or(DEFAULT_FILTER_PAGE_CAP),
            theme: self.theme,
            ..AppConfig::default()
        }
        .with_api_base(self.api_url.as_str())
    }
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum RickdexComponentId {
    Browser,
    Menu,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum RickdexContext {
    Main,
    Menu,
}

impl EventRoutingState<RickdexComponentId, RickdexContext> for AppState {
    fn focused(&self) -> Option<RickdexComponentId> {
        if self.menu_open {
            Some(RickdexComponentId::Menu)
        } else {
            Some(RickdexComponentId::Browser)
        }
    }

    fn modal(&self) -> Option<RickdexComponentId> {
        if self.menu_open {
            Some(RickdexComponentId::Menu)
        } else {
            None
        }
    }

    fn binding_context(&self, id: RickdexComponentId) -> RickdexContext {
        match id {
            RickdexComponentId::Browser => RickdexContext::Main,
            RickdexComponentId::Menu => RickdexContext::Menu,
        }
    }

    fn default_context(&self) -> RickdexContext {
        RickdexContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = args.config();
    tracing::info!(api = %config.api_base, cap = config.filter_page_cap, "starting rickdex");

    let debug = DebugSession::new(args.debug);

    let state = debug
        .load_state_or_else_async(move || async move {
            let mut state = AppState::new(config);
            if let Ok(size) = crossterm::terminal::size() {
                state.terminal_size = size;
            }
            Ok::<AppState, io::Error>(state)
        })
        .await
        .map_err(debug_error)?;
    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct RickdexUi {
    browser: Browser,
    menu: FilterMenu,
}

impl RickdexUi {
    fn new() -> Self {
        Self {
            browser: Browser,
            menu: FilterMenu::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<RickdexComponentId>,
    ) {
        event_ctx.set_component_area(RickdexComponentId::Browser, area);

        let props = BrowserProps {
            state,
            is_focused: render_ctx.is_focused() && !state.menu_open,
        };
        self.browser.render(frame, area, props);

        if state.menu_open {
            event_ctx.set_component_area(RickdexComponentId::Menu, centered_rect(48, 12, area));
            let props = FilterMenuProps {
                dropdowns: &state.dropdowns,
                row: state.menu_row,
                theme: state.theme,
                loading: state.filter_options.is_loading(),
                is_focused: render_ctx.is_focused(),
            };
            self.menu.render(frame, area, props);
        } else {
            event_ctx
                .component_areas
                .remove(&RickdexComponentId::Menu);
        }
    }

    fn handle_browser_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = BrowserProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .browser
            .handle_event(event, props)
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }

    fn handle_menu_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = FilterMenuProps {
            dropdowns: &state.dropdowns,
            row: state.menu_row,
            theme: state.theme,
            loading: state.filter_options.is_loading(),
            is_focused: true,
        };
        let actions: Vec<_> = self.menu.handle_event(event, props).into_iter().collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(RickdexUi::new()));
    let mut bus: EventBus<AppState, Action, RickdexComponentId, RickdexContext> = EventBus::new();
    let keybindings: Keybindings<RickdexContext> = Keybindings::new();

    let ui_browser = Rc::clone(&ui);
    bus.register(RickdexComponentId::Browser, move |event, state| {
        ui_browser
            .borrow_mut()
            .handle_browser_event(&event.kind, state)
    });

    let ui_menu = Rc::clone(&ui);
    bus.register(RickdexComponentId::Menu, move |event, state| {
        ui_menu.borrow_mut().handle_menu_event(&event.kind, state)
    });

    // Layout switches between wide and compact on resize
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(width, height) => {
            HandlerResponse::action(Action::UiTerminalResize(width, height)).with_render()
        }
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(SKELETON_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::LoadPage { api_base, request } => {
            // Same key: a newer page request replaces the one in flight
            ctx.tasks().spawn(TaskKey::new("page"), async move {
                let api = HttpCharacterApi::new(api_base);
                match api.fetch_page(request.page, &request.filters).await {
                    Ok(page) => Action::PageDidLoad {
                        token: request.token,
                        page,
                    },
                    Err(e) => {
                        tracing::error!(page = request.page, error = %e, "page load failed");
                        Action::PageDidError {
                            token: request.token,
                            error: e.to_string(),
                        }
                    }
                }
            });
        }
        Effect::CollectFilterOptions {
            api_base,
            max_pages,
        } => {
            ctx.tasks()
                .spawn(TaskKey::new("filter_options"), async move {
                    let api = HttpCharacterApi::new(api_base);
                    Action::FilterOptionsDidLoad(collect_filter_options(&api, max_pages).await)
                });
        }
    }
}
