//! Interactive terminal front end for the booking wizard.

use anyhow::Context;
use chrono::Datelike;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

use paddelup::models::Service;
use paddelup::services::client::BookingClient;
use paddelup::wizard::{Outcome, Step, Wizard, WizardEvent};

#[derive(Parser)]
#[command(name = "paddelup-book")]
#[command(about = "Book your padel session in just a few steps", long_about = None)]
struct Cli {
    /// Origin of the booking server
    #[arg(long, env = "PADDELUP_URL", default_value = "http://localhost:3000")]
    proxy_url: String,
}

enum Input {
    Quit,
    Back,
    Keep,
    Value(String),
}

type StdinLines = Lines<BufReader<Stdin>>;

async fn prompt(lines: &mut StdinLines, label: &str, current: &str) -> anyhow::Result<Input> {
    let mut out = tokio::io::stdout();
    let hint = if current.is_empty() {
        String::new()
    } else {
        format!(" [{current}]")
    };
    out.write_all(format!("{label}{hint}: ").as_bytes()).await?;
    out.flush().await?;

    let Some(line) = lines.next_line().await.context("failed to read input")? else {
        return Ok(Input::Quit);
    };
    Ok(match line.trim() {
        "q" => Input::Quit,
        "b" => Input::Back,
        "" => Input::Keep,
        other => Input::Value(other.to_string()),
    })
}

fn render(wizard: &Wizard) {
    println!();
    println!("Step {} of 3", wizard.step().number());
    match wizard.outcome() {
        Outcome::None => {}
        Outcome::Success(msg) => println!("  ✔ {msg}"),
        Outcome::Error(msg) => println!("  ✘ {msg}"),
    }
}

fn footer() {
    let year = chrono::Local::now().year();
    println!();
    println!("© {year} PaddelUp. All rights reserved.");
    println!("Contact us: info@paddelup.com | Phone: +1 (234) 567-890");
}

#[derive(Clone, Copy)]
enum Field {
    Date,
    Time,
    Name,
    Email,
    Phone,
}

impl Field {
    fn label(self) -> &'static str {
        match self {
            Field::Date => "Select date (YYYY-MM-DD)",
            Field::Time => "Select time (HH:MM)",
            Field::Name => "Your name",
            Field::Email => "Email address",
            Field::Phone => "Phone number",
        }
    }

    fn current(self, wizard: &Wizard) -> String {
        let draft = wizard.draft();
        match self {
            Field::Date => draft.date.clone(),
            Field::Time => draft.time.clone(),
            Field::Name => draft.name.clone(),
            Field::Email => draft.email.clone(),
            Field::Phone => draft.phone.clone(),
        }
    }

    fn event(self, value: String) -> WizardEvent {
        match self {
            Field::Date => WizardEvent::SetDate(value),
            Field::Time => WizardEvent::SetTime(value),
            Field::Name => WizardEvent::SetName(value),
            Field::Email => WizardEvent::SetEmail(value),
            Field::Phone => WizardEvent::SetPhone(value),
        }
    }
}

enum Flow {
    Done,
    Back,
    Quit,
}

/// Prompts for each field of the current step, stopping early on `b` or `q`.
async fn fill(
    lines: &mut StdinLines,
    wizard: &mut Wizard,
    fields: &[Field],
) -> anyhow::Result<Flow> {
    for field in fields {
        match prompt(lines, field.label(), &field.current(wizard)).await? {
            Input::Quit => return Ok(Flow::Quit),
            Input::Back => {
                wizard.dispatch(WizardEvent::Back);
                return Ok(Flow::Back);
            }
            Input::Keep => {}
            Input::Value(v) => {
                wizard.dispatch(field.event(v));
            }
        }
    }
    Ok(Flow::Done)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();
    let client = BookingClient::new(&cli.proxy_url);
    let mut wizard = Wizard::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("PaddelUp Booking");
    println!("Book your padel session in just a few steps! (b = back, q = quit)");

    loop {
        render(&wizard);
        match wizard.step() {
            Step::SelectService => {
                println!("Choose your session type:");
                for (i, svc) in Service::ALL.iter().enumerate() {
                    let mark = if wizard.draft().service() == Some(*svc) { "*" } else { " " };
                    println!("  {mark} {}) {}", i + 1, svc.label());
                }
                match prompt(&mut lines, "Option", "").await? {
                    Input::Quit => break,
                    Input::Back | Input::Keep => {}
                    Input::Value(v) => {
                        let picked = v
                            .parse::<usize>()
                            .ok()
                            .and_then(|n| n.checked_sub(1))
                            .and_then(|i| Service::ALL.get(i).copied());
                        if let Some(svc) = picked {
                            wizard.dispatch(WizardEvent::SelectService(svc));
                        }
                    }
                }
                wizard.dispatch(WizardEvent::Next);
            }
            Step::SelectDateTime => {
                let fields = [Field::Date, Field::Time];
                match fill(&mut lines, &mut wizard, &fields).await? {
                    Flow::Quit => break,
                    Flow::Back => {}
                    Flow::Done => {
                        wizard.dispatch(WizardEvent::Next);
                    }
                }
            }
            Step::ContactInfo => {
                let fields = [Field::Name, Field::Email, Field::Phone];
                match fill(&mut lines, &mut wizard, &fields).await? {
                    Flow::Quit => break,
                    Flow::Back => {}
                    Flow::Done => {
                        if let Some(record) = wizard.dispatch(WizardEvent::Submit) {
                            println!("Submitting...");
                            let result = client.submit(&record).await;
                            wizard.dispatch(WizardEvent::Settled(result));
                        }
                    }
                }
            }
        }
    }

    footer();
    Ok(())
}
