//! # Shipping Status Query System
//!
//! Interactive menu over a [`ShippingSystem`]: place orders, record shipping events and ask
//! questions about them. All state lives in memory for the life of the process.
//!
//! Configuration comes from `SHIPPING_*` environment variables (see
//! [`TrackerConfig`]) and log verbosity from `RUST_LOG`.

use shipping_tracker::actor::{ClientError, TrackingClient};
use shipping_tracker::config::TrackerConfig;
use shipping_tracker::lifecycle::{setup_tracing, ShippingSystem};
use shipping_tracker::model::{OrderCreate, OrderId, ShippingStatus};
use shipping_tracker::query::ORDER_NOT_FOUND_REPLY;
use shipping_tracker::registry::TrackingError;
use std::error::Error;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{info, Instrument};

type CliResult<T> = Result<T, Box<dyn Error>>;

/// Canned questions behind the order menu's numbered options.
const MENU_QUESTIONS: [(&str, &str); 4] = [
    ("1", "What is the status?"),
    ("2", "Where is my order?"),
    ("3", "When will it arrive?"),
    ("4", "Show me the history"),
];

#[tokio::main]
async fn main() -> CliResult<()> {
    setup_tracing();

    let config = TrackerConfig::from_env()?;
    info!(?config, "Starting shipping tracker");
    let system = ShippingSystem::new(&config);
    let mut prompt = Prompt::new();

    println!("Welcome to the Shipping Status Query System!");

    loop {
        println!("\n{}", "=".repeat(50));
        println!("1. Create a new order");
        println!("2. Check order status");
        println!("3. Record a shipping update");
        println!("4. Exit");

        let Some(choice) = prompt.ask("\nPlease select an option (1-4): ").await? else {
            break;
        };

        match choice.trim() {
            "1" => {
                let span = tracing::info_span!("order_creation");
                create_order(&system.client, &mut prompt).instrument(span).await?;
            }
            "2" => query_order(&system.client, &mut prompt).await?,
            "3" => record_update(&system.client, &mut prompt).await?,
            "4" => {
                println!("\nThank you for using the Shipping Status Query System. Goodbye!");
                break;
            }
            _ => println!("\nInvalid option. Please try again."),
        }
    }

    system.shutdown().await?;
    Ok(())
}

async fn create_order(client: &TrackingClient, prompt: &mut Prompt) -> CliResult<()> {
    let Some(customer_id) = prompt.ask("Enter customer ID: ").await? else {
        return Ok(());
    };

    println!("Enter items (one per line, press Enter twice when done):");
    let mut items = Vec::new();
    while let Some(item) = prompt.line().await? {
        if item.is_empty() {
            break;
        }
        items.push(item);
    }

    let id = client
        .create(OrderCreate::new(customer_id.trim(), items))
        .await?;
    println!("\nOrder created successfully! Your order ID is: {id}");

    // Demo shipping events so there is something to ask about.
    let demo = [
        (ShippingStatus::Processing, None),
        (ShippingStatus::Shipped, Some("Warehouse A")),
        (ShippingStatus::InTransit, Some("Distribution Center B")),
    ];
    for (status, location) in demo {
        client
            .update_status(id.clone(), status, location.map(str::to_string))
            .await?;
    }

    Ok(())
}

async fn query_order(client: &TrackingClient, prompt: &mut Prompt) -> CliResult<()> {
    let Some(id) = prompt.ask("Enter your order ID: ").await? else {
        return Ok(());
    };
    let id = OrderId::from(id.trim());

    loop {
        println!("\nWhat would you like to know about your order?");
        println!("1. Current status");
        println!("2. Location");
        println!("3. Estimated delivery");
        println!("4. Tracking history");
        println!("5. Full report");
        println!("6. Back to main menu");
        println!("(or just type your question)");

        let Some(choice) = prompt.ask("\nSelect an option (1-6): ").await? else {
            return Ok(());
        };
        let choice = choice.trim();

        match choice {
            "6" => return Ok(()),
            "5" => match client.report(id.clone()).await {
                Ok(report) => println!("\n{}", serde_json::to_string_pretty(&report)?),
                Err(ClientError::Tracking(TrackingError::NotFound(_))) => {
                    println!("\nResponse: {ORDER_NOT_FOUND_REPLY}")
                }
                Err(e) => return Err(e.into()),
            },
            "" => println!("\nInvalid option. Please try again."),
            _ => {
                let question = MENU_QUESTIONS
                    .iter()
                    .find(|(key, _)| *key == choice)
                    .map_or(choice, |(_, question)| *question);
                let response = client.answer(question, id.clone()).await?;
                println!("\nResponse: {response}");
            }
        }
    }
}

async fn record_update(client: &TrackingClient, prompt: &mut Prompt) -> CliResult<()> {
    let Some(id) = prompt.ask("Enter order ID: ").await? else {
        return Ok(());
    };

    let labels: Vec<_> = ShippingStatus::ALL.iter().map(|s| s.label()).collect();
    println!("Statuses: {}", labels.join(", "));
    let Some(status) = prompt.ask("New status: ").await? else {
        return Ok(());
    };
    let status: ShippingStatus = match status.parse() {
        Ok(status) => status,
        Err(e) => {
            println!("\n{e}");
            return Ok(());
        }
    };

    let location = prompt
        .ask("Location (leave blank to keep the current one): ")
        .await?
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty());

    match client
        .update_status(OrderId::from(id.trim()), status, location)
        .await
    {
        Ok(order) => println!(
            "\nRecorded. Order {} is now {} ({} updates).",
            order.id(),
            order.status(),
            order.history().len()
        ),
        Err(ClientError::Tracking(e)) => println!("\n{e}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Line-oriented stdin reader. `None` means stdin was closed.
struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompt {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    async fn ask(&mut self, question: &str) -> CliResult<Option<String>> {
        print!("{question}");
        std::io::stdout().flush()?;
        self.line().await
    }

    async fn line(&mut self) -> CliResult<Option<String>> {
        Ok(self.lines.next_line().await?)
    }
}
