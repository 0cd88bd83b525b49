// Terminal presentation shared by the demo binaries.

use debt_flow::{InputMode, ResultCard, RiskLevel, UserInput, format::to_ansi};
use std::io::{self, Write};

pub fn init_tracing() {
    // Quiet by default so log lines don't interleave with the conversation
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

pub fn print_bot(text: &str) {
    println!("⚖  {}", to_ansi(text));
}

pub fn print_input(input: &InputMode) -> io::Result<()> {
    match input {
        InputMode::Choices { options } => {
            for (i, option) in options.iter().enumerate() {
                println!("   [{}] {}", i + 1, option.label);
            }
            print!("> ");
        }
        InputMode::FreeText { placeholder } => print!("({placeholder}) > "),
        InputMode::None => {}
    }
    io::stdout().flush()
}

/// Map a typed line to an answer: options by number or value, text as-is.
pub fn parse_answer(input: &InputMode, line: &str) -> Option<UserInput> {
    match input {
        InputMode::Choices { options } => {
            let line = line.trim();
            let by_number = line
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| options.get(i));
            by_number
                .or_else(|| options.iter().find(|o| o.value == line))
                .map(|o| UserInput::Choice(o.value.clone()))
        }
        InputMode::FreeText { .. } => Some(UserInput::Text(line.to_string())),
        InputMode::None => None,
    }
}

pub fn print_card(card: &ResultCard) {
    let colour = match card.level {
        RiskLevel::High => "\x1b[31m",
        RiskLevel::Medium => "\x1b[33m",
        RiskLevel::Low => "\x1b[32m",
    };
    println!();
    println!("{colour}[{}]\x1b[0m", card.copy.badge);
    println!("{colour}{}\x1b[0m", card.copy.headline);
    println!("{}", card.copy.summary);
    println!();
    println!("  Original debt   {}", card.original_amount);
    println!("  Current amount  {}", card.current_amount);
    let growth = format!("+{}%", card.growth_percent);
    if card.growth_highlighted {
        println!("  Growth          {colour}{growth}\x1b[0m");
    } else {
        println!("  Growth          {growth}");
    }
    println!(
        "  Listed          {}",
        if card.negatively_listed { "Yes ⚠️" } else { "No" }
    );
    println!();
    println!("{colour}WHAT CAN BE DONE\x1b[0m");
    for action in &card.actions {
        println!("  {}", action.label);
    }
    println!();
    println!("{}", to_ansi(&card.follow_up));
    println!("📲 {}", card.contact_link);
    println!("\x1b[2m{}\x1b[0m", card.disclaimer);
}
