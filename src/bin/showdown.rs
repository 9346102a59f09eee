use showdown::resolver::Outcome;
use showdown::table::{Table, TableError};
use std::process::ExitCode;

const USAGE: &str = "usage: showdown \"2H 3D 5S 9C KD\" \"2C 3H 4S 8C AH\" ...
       showdown --deal <players>

Each positional argument is one five-card hand. With --deal, random hands
are dealt from a single shuffled deck instead.";

fn run() -> Result<(), TableError> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let table = if args.first().map(String::as_str) == Some("--deal") {
        let players: usize = args
            .get(1)
            .and_then(|s| s.parse().ok())
            .filter(|&n| n > 0)
            .ok_or(TableError::NoPlayers)?;
        let names: Vec<String> = (1..=players).map(|i| format!("Player {i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut t = Table::new(&refs)?;
        t.deal()?;
        t
    } else {
        let names: Vec<String> =
            (1..=args.len()).map(|i| format!("Player {i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let scripts: Vec<&str> = args.iter().map(String::as_str).collect();
        let mut t = Table::new(&refs)?;
        t.deal_scripted(&scripts)?;
        t
    };

    let result = table.showdown()?;
    for (seat, eval) in table.seats().iter().zip(&result.evaluations) {
        // deal_scripted/deal filled every seat, so the hand is present.
        if let Some(hand) = seat.hand() {
            println!("{} - {} - {}", seat.name(), hand, eval.category);
        }
    }
    match result.outcome {
        Outcome::Winner(i) => println!("Winner: {}", table.seats()[i].name()),
        Outcome::Tie => println!("Tie"),
    }
    Ok(())
}

fn main() -> ExitCode {
    if std::env::args().len() <= 1 {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    }
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("showdown: {e}");
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
    }
}
