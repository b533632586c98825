// study-compass - turns learning snapshots into plans you can act on
//
// This is the main entry point. Parses CLI args and dispatches to handlers.
// The binary owns the ambient bits the core refuses to touch: today's
// date and the RNG.

use std::env;
use std::path::Path;
use study_compass_lib::{
    model::Snapshot,
    planner::{
        analyze_study_habits, analyze_subject_progress, check_achievement_conditions,
        generate_learning_plan, generate_learning_recommendations,
    },
    voice::process_voice_command,
    Result,
};

fn main() -> Result<()> {
    // Grab whatever the user typed
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let command = &args[1];

    let result = match command.as_str() {
        "plan" => handle_plan(&args[2..]),
        "habits" => handle_habits(&args[2..]),
        "progress" => handle_progress(&args[2..]),
        "recommend" => handle_recommend(&args[2..]),
        "achievements" => handle_achievements(&args[2..]),
        "interpret" => handle_interpret(&args[2..]),
        "version" | "-v" | "--version" => {
            println!("study-compass v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    };

    if let Err(e) = &result {
        eprintln!("{}", e.user_message());
    }

    result
}

fn load_snapshot(args: &[String]) -> Result<Snapshot> {
    let path = args.first().ok_or_else(|| {
        study_compass_lib::CompassError::InvalidInput("missing snapshot path".to_string())
    })?;
    Snapshot::load(Path::new(path))
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

fn handle_plan(args: &[String]) -> Result<()> {
    let snapshot = load_snapshot(args)?;
    let plan = generate_learning_plan(
        &snapshot.user.preferences,
        &snapshot.learning,
        today(),
    );

    println!("\nLearning Plan");
    println!("{}", "=".repeat(60));

    for (label, goals) in [
        ("Today", &plan.daily_goals),
        ("This Week", &plan.weekly_goals),
        ("This Month", &plan.monthly_goals),
    ] {
        println!("\n{}:", label);
        for (i, goal) in goals.iter().enumerate() {
            println!("{:3}. [{:?}] {}", i + 1, goal.priority, goal.title);
            println!("     {}", goal.description);
        }
    }

    println!("\n{}", "=".repeat(60));
    Ok(())
}

fn handle_habits(args: &[String]) -> Result<()> {
    let snapshot = load_snapshot(args)?;
    let habits = analyze_study_habits(&snapshot.learning.sessions, today());

    println!("\nStudy Habits");
    println!("{}", "=".repeat(60));
    println!("  Preferred time:    {}", habits.preferred_time_of_day);
    println!("  Average session:   {} min", habits.average_duration_minutes);
    match &habits.most_productive_subject {
        Some(subject) => println!("  Most productive:   {}", subject),
        None => println!("  Most productive:   (no sessions yet)"),
    }
    println!("  Consistency score: {}/100", habits.consistency_score);
    println!("{}", "=".repeat(60));

    Ok(())
}

fn handle_progress(args: &[String]) -> Result<()> {
    let snapshot = load_snapshot(args)?;
    let profile = analyze_subject_progress(&snapshot.learning.subjects);

    println!("\nSubject Progress");
    println!("{}", "=".repeat(60));
    println!("  Average progress: {}%", profile.average_progress);
    if let Some(strongest) = &profile.strongest_subject {
        println!("  Strongest:        {}", strongest);
    }
    if let Some(weakest) = &profile.weakest_subject {
        println!("  Weakest:          {}", weakest);
    }

    if profile.needs_attention.is_empty() {
        println!("\nNo topics need attention right now.");
    } else {
        println!("\nNeeds attention:");
        for (i, item) in profile.needs_attention.iter().enumerate() {
            println!(
                "{:3}. {} / {} ({}%, mastery: {})",
                i + 1,
                item.subject,
                item.topic,
                item.progress,
                item.mastery
            );
        }
    }

    println!("{}", "=".repeat(60));
    Ok(())
}

fn handle_recommend(args: &[String]) -> Result<()> {
    let snapshot = load_snapshot(args)?;
    let mut rng = rand::thread_rng();
    let recommendations = generate_learning_recommendations(&snapshot.learning, &mut rng);

    if recommendations.is_empty() {
        println!("No recommendations yet. Record some subjects first!");
        return Ok(());
    }

    println!("\nRecommendations");
    println!("{}", "=".repeat(60));
    for (i, rec) in recommendations.iter().enumerate() {
        println!("\n{:3}. {} / {}", i + 1, rec.subject, rec.topic);
        println!("     Reason: {}", rec.reason);
        for resource in &rec.resources {
            println!("     - {}", resource.title);
        }
    }
    println!("\n{}", "=".repeat(60));

    Ok(())
}

fn handle_achievements(args: &[String]) -> Result<()> {
    let snapshot = load_snapshot(args)?;
    let unlocked = check_achievement_conditions(
        &snapshot.user,
        &snapshot.learning,
        &snapshot.achievements,
    );

    if unlocked.is_empty() {
        println!("No new achievements to unlock.");
    } else {
        println!("\nNewly unlockable achievements:");
        for id in &unlocked {
            println!("  - {}", id);
        }
    }

    Ok(())
}

fn handle_interpret(args: &[String]) -> Result<()> {
    if args.is_empty() {
        eprintln!("Error: No transcript provided");
        return Ok(());
    }

    let transcript = args.join(" ");
    let action = process_voice_command(&transcript);

    println!("{}", serde_json::to_string_pretty(&action)?);
    Ok(())
}

fn print_usage() {
    println!(
        r#"study-compass v{} - Learning plans from your study history

USAGE:
    study-compass <COMMAND> [OPTIONS]

COMMANDS:
    plan <snapshot.json>           Generate daily/weekly/monthly goals
    habits <snapshot.json>         Show the derived habit profile
    progress <snapshot.json>       Show the subject progress profile
    recommend <snapshot.json>      Suggest topics to focus on
    achievements <snapshot.json>   List newly unlockable achievements
    interpret <transcript...>      Resolve a voice transcript to an action
    version                        Show version
    help                           Show this help

EXAMPLES:
    study-compass plan snapshot.json
    study-compass habits snapshot.json
    study-compass interpret show my progress

The snapshot file carries the same user/learning/achievements objects
the dashboard keeps in local storage.
"#,
        env!("CARGO_PKG_VERSION")
    );
}
