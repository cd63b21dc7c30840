use anyhow::Context;
use chrono::Local;
use clap::Parser;
use saffron_admin::{
    api::AdminClient,
    auth::{AuthManager, AuthToken},
    cli::{Cli, Commands, ListArgs},
    config::Config,
    format::{format_date, format_datetime, format_inr, short_id},
    listing::{Listing, Searchable},
    records::{sample_bets, sample_ledger},
    validation::{FundsRequest, LoginRequest, SignupRequest},
    Error,
};

fn fail(action: &str, e: &Error) -> ! {
    eprintln!("{}: {}", action, e.display_message());
    std::process::exit(1);
}

fn authorized_client(config: &Config, auth: &AuthManager) -> anyhow::Result<AdminClient> {
    let token = match auth.get_token() {
        Ok(token) => token,
        Err(_) => {
            eprintln!("Error: Not authenticated. Run 'saffron-admin login' first.");
            std::process::exit(1);
        }
    };
    Ok(AdminClient::new(config)?.with_token(Some(token.token.clone())))
}

fn print_page<R: Searchable>(listing: &mut Listing<R>, args: &ListArgs, row: impl Fn(&R) -> String) {
    listing.set_search_term(args.search.clone());
    listing.set_page(args.page);
    let view = listing.render();

    if view.rows.is_empty() {
        println!("No matching records found");
    }
    for record in &view.rows {
        println!("  {}", row(record));
    }
    println!();
    if let Some((first, last)) = view.visible_range {
        println!("Showing {}-{}", first, last);
    }
    println!(
        "Page {} of {} ({} matching of {})",
        view.current_page, view.total_pages, view.filtered_count, view.total_count
    );
}

fn run_gui(config: Config, auth: AuthManager) -> anyhow::Result<()> {
    use saffron_admin::gui::AdminApp;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Saffron Exch Admin"),
        ..Default::default()
    };

    eframe::run_native(
        "Saffron Exch Admin",
        native_options,
        Box::new(|cc| Ok(Box::new(AdminApp::new(cc, config, auth)?))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(url) = &cli.api_url {
        config.api_base_url = url.trim_end_matches('/').to_string();
        config.validate().context("Invalid --api-url")?;
    }

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::debug!("Configuration loaded, API at {}", config.api_base_url);

    let mut auth = AuthManager::new().context("Failed to read stored session")?;

    match cli.command {
        None | Some(Commands::Gui) => run_gui(config, auth)?,

        Some(Commands::Login {
            phone,
            password,
            remember,
        }) => {
            let request = LoginRequest::new(&phone, &password).unwrap_or_else(|e| fail("Login failed", &e.into()));
            let client = AdminClient::new(&config)?;

            match client.login(&request).await {
                Ok(token) => {
                    auth.set_token(AuthToken::new(token, request.phone()), remember)?;
                    println!("✓ Logged in as {}", request.phone());
                    if !remember {
                        println!("  Session not saved. Use --remember to stay logged in.");
                    }
                }
                Err(e) => fail("Login failed", &e),
            }
        }

        Some(Commands::Logout) => {
            auth.logout()?;
            println!("Successfully logged out");
        }

        Some(Commands::Status) => {
            println!("Saffron Exch Admin Status");
            println!("=========================");
            println!();
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            match auth.get_token() {
                Ok(token) => println!(
                    "Logged in: Yes ({} since {})",
                    token.phone,
                    format_datetime(&token.issued_at.with_timezone(&Local))
                ),
                Err(_) => println!("Logged in: No"),
            }
            println!();
            println!("Configuration:");
            println!("  API Base URL: {}", config.api_base_url);
            println!("  Request Timeout: {}s", config.request_timeout_secs);
            println!("  Log Level: {}", config.log_level);
            println!(
                "  Page Sizes: users {}, bets {}, ledger {}, history {}",
                config.page_sizes.users,
                config.page_sizes.bets,
                config.page_sizes.ledger,
                config.page_sizes.history
            );
            println!();

            if let Ok(config_path) = Config::config_path() {
                println!("Config Path: {:?}", config_path);
            }

            if let Ok(data_dir) = Config::data_dir() {
                println!("Data Directory: {:?}", data_dir);
            }
        }

        Some(Commands::Users { list }) => {
            let client = authorized_client(&config, &auth)?;
            let users = client
                .list_users()
                .await
                .unwrap_or_else(|e| fail("Failed to fetch users", &e));

            println!("Registered Users");
            println!("================");
            let mut listing = Listing::with_records(users, config.page_sizes.users);
            print_page(&mut listing, &list, |u| {
                format!(
                    "[{}] {} - {} - {} - {} bets - joined {}",
                    short_id(&u.id),
                    u.full_name,
                    u.phone,
                    format_inr(u.money),
                    u.total_bets,
                    u.created_at
                        .map(|t| format_date(&t.with_timezone(&Local)))
                        .unwrap_or_else(|| "-".to_string())
                )
            });
        }

        Some(Commands::History { list }) => {
            let client = authorized_client(&config, &auth)?;
            let entries = client
                .account_history()
                .await
                .unwrap_or_else(|e| fail("Failed to fetch account history", &e));

            println!("User Account History");
            println!("====================");
            let mut listing = Listing::with_records(entries, config.page_sizes.history);
            print_page(&mut listing, &list, |e| {
                format!(
                    "{} - {} ({}) - {} {} - {}",
                    e.user_id,
                    e.full_name,
                    e.phone,
                    e.transaction.kind,
                    format_inr(e.transaction.amount),
                    format_datetime(&e.transaction.created_at.with_timezone(&Local))
                )
            });
        }

        Some(Commands::Bets { list }) => {
            println!("Bet History");
            println!("===========");
            let mut listing = Listing::with_records(sample_bets(), config.page_sizes.bets);
            print_page(&mut listing, &list, |b| {
                format!(
                    "{} - {} / {} - {} - {} - {}",
                    b.id,
                    b.sport,
                    b.event,
                    b.option,
                    format_inr(b.amount),
                    b.status.label()
                )
            });
        }

        Some(Commands::Ledger { list, tab }) => {
            println!("Transaction History ({})", tab.label());
            println!("===================");
            let mut listing = Listing::with_records(sample_ledger(), config.page_sizes.ledger);
            listing.set_category(tab);
            print_page(&mut listing, &list, |r| {
                format!(
                    "{} - deposit {} - bet {} - withdraw {} - holding {} - {:?}",
                    r.id,
                    format_inr(r.deposit),
                    format_inr(r.bet),
                    format_inr(r.withdraw),
                    format_inr(r.holding),
                    r.outcome
                )
            });
        }

        Some(Commands::AddMoney { phone, amount }) => {
            let request = FundsRequest::new(&phone, &amount)
                .unwrap_or_else(|e| fail("Transaction failed", &e.into()));
            let client = authorized_client(&config, &auth)?;

            match client.add_money(&request).await {
                Ok(receipt) => {
                    println!("✓ {} added to {}", format_inr(receipt.amount), receipt.phone);
                    println!("  New Balance: {}", format_inr(receipt.new_balance));
                }
                Err(e) => fail("Transaction failed", &e),
            }
        }

        Some(Commands::Withdraw { phone, amount }) => {
            let request = FundsRequest::new(&phone, &amount)
                .unwrap_or_else(|e| fail("Transaction failed", &e.into()));
            let client = authorized_client(&config, &auth)?;

            match client.withdraw_money(&request).await {
                Ok(receipt) => {
                    println!("✓ {} withdrawn from {}", format_inr(receipt.amount), receipt.phone);
                    println!("  New Balance: {}", format_inr(receipt.new_balance));
                }
                Err(e) => fail("Transaction failed", &e),
            }
        }

        Some(Commands::AddPlayer {
            full_name,
            phone,
            password,
            referral_code,
        }) => {
            let request = SignupRequest::new(&full_name, &phone, &password, referral_code.as_deref())
                .unwrap_or_else(|e| fail("Failed to add player", &e.into()));
            let client = authorized_client(&config, &auth)?;

            match client.signup(&request).await {
                Ok(message) => println!("✓ {} ({})", message, request.full_name()),
                Err(e) => fail("Failed to add player", &e),
            }
        }
    }

    Ok(())
}
