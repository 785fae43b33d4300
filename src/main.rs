use clap::Parser;
use travel_assistant::core::geo::format_distance;
use travel_assistant::core::{KeyValueStore, PlaceLookup};
use travel_assistant::domain::model::SearchResult;
use travel_assistant::utils::error::ErrorSeverity;
use travel_assistant::utils::{logger, validation::Validate};
use travel_assistant::{
    recommendation_message, CliConfig, Command, HttpPlaceLookup, JsonFileStore, ReviewCommand,
    TravelAssistant, TravelError,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if cli.json_logs || config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose || config.verbose());
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let store = JsonFileStore::new(config.storage.data_dir.clone());
    let lookup = HttpPlaceLookup::new(config)?;
    let assistant = TravelAssistant::new(store, lookup);

    if let Err(e) = run(&assistant, cli.command).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 1,      // 使用者輸入
            ErrorSeverity::Medium => 2,   // 外部服務
            ErrorSeverity::High => 3,     // 設定
            ErrorSeverity::Critical => 4, // 本地存儲
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run<S: KeyValueStore, L: PlaceLookup>(
    assistant: &TravelAssistant<S, L>,
    command: Command,
) -> Result<(), TravelError> {
    match command {
        Command::Search { place } => {
            let result = assistant.search_place(&place).await?;
            print_result(&result);
        }
        Command::Route { from, to } => {
            let result = assistant.search_route(&from, &to).await?;
            print_result(&result);
        }
        Command::Result => match assistant.current_result()? {
            Some(result) => print_result(&result),
            None => println!("No search yet. Try `travel-assistant search Goa`."),
        },
        Command::Score { place } => {
            let summary = assistant.summarize(&place)?;
            println!("📍 {}", summary.place);
            println!(
                "⭐ {:.1} average from {} review(s)",
                summary.average_rating, summary.review_count
            );
            println!("🤖 Score: {}/100 - {}", summary.score, summary.recommendation);
            if !summary.tags.positive.is_empty() {
                println!("👍 {}", summary.tags.positive.join(", "));
            }
            if !summary.tags.negative.is_empty() {
                println!("👎 {}", summary.tags.negative.join(", "));
            }
        }
        Command::Review(review_command) => run_review(assistant, review_command)?,
        Command::Register {
            name,
            email,
            password,
            confirm_password,
        } => {
            let account = assistant
                .accounts()
                .register(&name, &email, &password, &confirm_password)?;
            println!("✅ Account created successfully! Signed in as {}", account.email);
        }
        Command::Login { email, password } => {
            let account = assistant.accounts().login(&email, &password)?;
            println!("✅ Welcome back, {}", account.name);
        }
        Command::Logout => {
            assistant.accounts().logout()?;
            println!("👋 Signed out");
        }
        Command::Whoami => match assistant.accounts().current_user()? {
            Some(account) => println!("{} <{}>", account.name, account.email),
            None => println!("Not signed in"),
        },
        Command::Chat { message } => {
            let reply = assistant.chat(&message.join(" "))?;
            println!("🤖 {}", reply.text);
        }
    }

    Ok(())
}

fn run_review<S: KeyValueStore, L: PlaceLookup>(
    assistant: &TravelAssistant<S, L>,
    command: ReviewCommand,
) -> Result<(), TravelError> {
    match command {
        ReviewCommand::Add {
            place,
            rating,
            text,
            author,
        } => {
            let author = match author {
                Some(author) => author,
                None => assistant
                    .accounts()
                    .current_user()?
                    .map(|a| a.name)
                    .unwrap_or_else(|| "Anonymous".to_string()),
            };
            let review = assistant.submit_review(&place, rating, &text, &author)?;
            println!("✅ Review for {} saved", review.place);
        }
        ReviewCommand::List { place } => {
            // 索引用全域位置，才能直接拿去 `review delete`
            let wanted = place.map(|p| p.to_lowercase());
            let reviews: Vec<_> = assistant
                .reviews()
                .all()?
                .into_iter()
                .enumerate()
                .filter(|(_, r)| wanted.as_ref().map_or(true, |w| r.place.to_lowercase() == *w))
                .collect();
            if reviews.is_empty() {
                println!("No reviews yet.");
            }
            for (index, review) in &reviews {
                println!(
                    "[{}] {} {} by {} ({})\n    {}",
                    index,
                    review.place,
                    "★".repeat(usize::from(review.rating)),
                    review.author,
                    review.timestamp.format("%Y-%m-%d"),
                    review.text
                );
            }
        }
        ReviewCommand::Delete { index } => {
            let removed = assistant.delete_review(index)?;
            println!("🗑️ Deleted review #{} for {}", index, removed.place);
        }
        ReviewCommand::Reset => {
            assistant.reset_reviews()?;
            println!("🔄 Reviews reset to sample data");
        }
    }

    Ok(())
}

fn print_result(result: &SearchResult) {
    println!("📍 {}", result.name);
    println!(
        "🧭 {:.4}, {:.4}",
        result.coordinates.latitude, result.coordinates.longitude
    );
    if let Some(route) = &result.route {
        println!("🛣️ {} → {}: {}", route.from, route.to, format_distance(route.distance_km));
    }
    println!();
    println!("{}", result.description);
    println!();
    println!(
        "🤖 Score: {}/100 - {}",
        result.score,
        recommendation_message(result.score)
    );
}
