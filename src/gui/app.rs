use eframe::egui;

use crate::api::AdminClient;
use crate::auth::AuthManager;
use crate::config::Config;
use crate::Result;

use super::add_player_view::AddPlayerView;
use super::bets_view::BetsView;
use super::components::{Notice, Sidebar, SidebarAction, StatusBar};
use super::history_view::HistoryView;
use super::ledger_view::LedgerView;
use super::login_view::LoginView;
use super::money_view::MoneyView;
use super::styles;
use super::users_view::UsersView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    AddPlayer,
    Money,
    Bets,
    Ledger,
    Users,
    History,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::AddPlayer,
        Screen::Money,
        Screen::Bets,
        Screen::Ledger,
        Screen::Users,
        Screen::History,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::AddPlayer => "Add Player",
            Screen::Money => "Money",
            Screen::Bets => "Bets",
            Screen::Ledger => "Data",
            Screen::Users => "Users",
            Screen::History => "History",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Screen::AddPlayer => "➕",
            Screen::Money => "₹",
            Screen::Bets => "⚡",
            Screen::Ledger => "📊",
            Screen::Users => "👥",
            Screen::History => "🕘",
        }
    }
}

enum AppState {
    Login,
    Dashboard,
}

pub struct AdminApp {
    state: AppState,
    screen: Screen,
    auth: AuthManager,
    client: AdminClient,
    config: Config,
    sidebar_collapsed: bool,
    notice: Option<Notice>,
    login_view: LoginView,
    add_player_view: AddPlayerView,
    money_view: MoneyView,
    bets_view: BetsView,
    ledger_view: LedgerView,
    users_view: UsersView,
    history_view: HistoryView,
}

impl AdminApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config, auth: AuthManager) -> Result<Self> {
        styles::setup_custom_style(&cc.egui_ctx);

        let token = auth.get_token().ok().map(|t| t.token.clone());
        let client = AdminClient::new(&config)?.with_token(token);

        let sizes = config.page_sizes;
        Ok(Self {
            state: if auth.is_authenticated() {
                AppState::Dashboard
            } else {
                AppState::Login
            },
            screen: Screen::AddPlayer,
            auth,
            client,
            sidebar_collapsed: false,
            notice: None,
            login_view: LoginView::default(),
            add_player_view: AddPlayerView::default(),
            money_view: MoneyView::default(),
            bets_view: BetsView::new(sizes.bets),
            ledger_view: LedgerView::new(sizes.ledger),
            users_view: UsersView::new(sizes.users),
            history_view: HistoryView::new(sizes.history),
            config,
        })
    }

    fn handle_logout(&mut self) {
        if let Err(e) = self.auth.logout() {
            log::error!("Failed to clear session: {}", e);
            self.notice = Some(Notice::from_error("Logout failed", &e));
        }
        self.client.set_token(None);

        // Fetched data belongs to the previous session.
        let sizes = self.config.page_sizes;
        self.users_view = UsersView::new(sizes.users);
        self.history_view = HistoryView::new(sizes.history);
        self.login_view = LoginView::default();
        self.state = AppState::Login;
    }

    fn dashboard(&mut self, ctx: &egui::Context) {
        let width = if self.sidebar_collapsed {
            Sidebar::COLLAPSED_WIDTH
        } else {
            Sidebar::EXPANDED_WIDTH
        };
        let operator = self.auth.get_token().ok().map(|t| t.phone.clone());

        let mut sidebar_action = None;
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(width)
            .frame(egui::Frame::none().fill(styles::SAFFRON).inner_margin(8.0))
            .show(ctx, |ui| {
                sidebar_action = Sidebar::show(
                    ui,
                    self.screen,
                    operator.as_deref(),
                    &mut self.sidebar_collapsed,
                );
            });

        match sidebar_action {
            Some(SidebarAction::Navigate(screen)) => self.screen = screen,
            Some(SidebarAction::Logout) => {
                self.handle_logout();
                return;
            }
            None => {}
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let notice = match self.screen {
                Screen::AddPlayer => {
                    self.add_player_view.ui(ui, &self.client);
                    None
                }
                Screen::Money => self.money_view.ui(ui, &self.client),
                Screen::Bets => {
                    self.bets_view.ui(ui);
                    None
                }
                Screen::Ledger => {
                    self.ledger_view.ui(ui);
                    None
                }
                Screen::Users => {
                    self.users_view.ui(ui, &self.client);
                    None
                }
                Screen::History => {
                    self.history_view.ui(ui, &self.client);
                    None
                }
            };
            if notice.is_some() {
                self.notice = notice;
            }
        });
    }
}

impl eframe::App for AdminApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(notice) = &self.notice {
            let mut clear = false;
            egui::TopBottomPanel::bottom("notice_bar").show(ctx, |ui| {
                StatusBar::show(ui, notice, &mut clear);
            });
            if clear {
                self.notice = None;
            }
        }

        match self.state {
            AppState::Login => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    if let Some(success) = self.login_view.ui(ui, &self.client) {
                        let bearer = success.token.token.clone();
                        match self.auth.set_token(success.token, success.remember) {
                            Ok(()) => {
                                self.client.set_token(Some(bearer));
                                self.notice = None;
                                self.state = AppState::Dashboard;
                            }
                            Err(e) => {
                                self.notice = Some(Notice::from_error("Failed to save session", &e));
                            }
                        }
                    }
                });
            }
            AppState::Dashboard => self.dashboard(ctx),
        }

        // Poll pending requests
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
