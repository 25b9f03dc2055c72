use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use bazi_base::{ALL_BRANCHES, Branch};
use bazi_fortune::{
    Gender, branch_relation, count_elements, daily_almanac, daily_ratings, day_master_strength,
    feng_shui_tip, kua_directions, kua_number, lucky_hours, missing_elements,
    personality_profile, year_fortune,
};
use bazi_pillars::{
    calendar_from_jdn, day_pillar, four_pillars, hour_pillar, julian_day_number, month_pillar,
    year_pillar, zodiac_from_year,
};

#[derive(Parser)]
#[command(name = "bazi", about = "BaZi (Four Pillars) calculation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four Pillars for a date
    Pillars {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Hour of day (0-23)
        #[arg(long)]
        hour: Option<i64>,
    },
    /// Year Pillar for a year
    YearPillar {
        /// Gregorian year
        year: i64,
    },
    /// Month Pillar for a year and month
    MonthPillar {
        /// Gregorian year
        year: i64,
        /// Gregorian month (1-12)
        month: i64,
    },
    /// Day Pillar for a date
    DayPillar {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Hour Pillar for a date and hour
    HourPillar {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Hour of day (0-23)
        hour: i64,
    },
    /// Five-Element weights for a date's chart
    Elements {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Hour of day (0-23)
        #[arg(long)]
        hour: Option<i64>,
    },
    /// Day Master strength for a date's chart
    Strength {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Hour of day (0-23)
        #[arg(long)]
        hour: Option<i64>,
    },
    /// Personality profile from a date's Day Master
    Personality {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Hour of day (0-23)
        #[arg(long)]
        hour: Option<i64>,
    },
    /// Daily fortune ratings for a zodiac sign
    Fortune {
        /// Zodiac animal (rat, ox, tiger, ...)
        zodiac: String,
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Relation between two branches (by zodiac animal)
    Relation {
        /// First zodiac animal
        first: String,
        /// Second zodiac animal
        second: String,
    },
    /// Auspicious double-hours for a date
    LuckyHours {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Daily do/don't almanac for a date
    Almanac {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Feng shui tip for a zodiac sign on a date
    Tip {
        /// Zodiac animal
        zodiac: String,
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Yearly fortune for a zodiac sign
    YearFortune {
        /// Zodiac animal
        zodiac: String,
        /// Gregorian year
        year: i64,
    },
    /// Kua number and directions for a birth year
    Kua {
        /// Birth year
        year: i64,
        /// Gender (male or female)
        gender: String,
    },
    /// Zodiac sign for a birth year
    Zodiac {
        /// Birth year
        year: i64,
    },
    /// Batch-generate daily fortune JSON files
    Generate {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// Number of days to generate
        #[arg(long, default_value = "365")]
        days: i64,
        /// Zodiac animal (default: all twelve)
        #[arg(long)]
        zodiac: Option<String>,
        /// Output directory
        #[arg(long, default_value = "generated-fortunes")]
        output: PathBuf,
    },
}

fn parse_date(s: &str) -> Result<(i64, i64, i64), String> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i64 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: i64 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: i64 = parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok((year, month, day))
}

fn require_date(s: &str) -> (i64, i64, i64) {
    parse_date(s).unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

fn require_zodiac(s: &str) -> Branch {
    Branch::from_animal(s).unwrap_or_else(|| {
        eprintln!("Invalid zodiac animal: {s}");
        eprintln!("Valid: rat, ox, tiger, rabbit, dragon, snake, horse, goat, monkey, rooster, dog, pig");
        std::process::exit(1);
    })
}

fn require_gender(s: &str) -> Gender {
    match s.to_lowercase().as_str() {
        "male" | "m" => Gender::Male,
        "female" | "f" => Gender::Female,
        _ => {
            eprintln!("Invalid gender: {s} (male or female)");
            std::process::exit(1);
        }
    }
}

fn print_pillar(label: &str, p: bazi_pillars::Pillar) {
    println!(
        "{label}: {} ({}) - {} {} / {} {}",
        p.chinese(),
        p.name(),
        p.stem.element().name(),
        p.stem.polarity().name(),
        p.branch.animal(),
        p.branch.element().name()
    );
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Pillars { date, hour } => {
            let (y, m, d) = require_date(&date);
            let p = four_pillars(y, m, d, hour);
            print_pillar("Year ", p.year);
            print_pillar("Month", p.month);
            print_pillar("Day  ", p.day);
            match p.hour {
                Some(h) => print_pillar("Hour ", h),
                None => println!("Hour : --"),
            }
        }
        Commands::YearPillar { year } => {
            print_pillar("Year", year_pillar(year));
        }
        Commands::MonthPillar { year, month } => {
            print_pillar("Month", month_pillar(year, month));
        }
        Commands::DayPillar { date } => {
            let (y, m, d) = require_date(&date);
            print_pillar("Day", day_pillar(y, m, d));
        }
        Commands::HourPillar { date, hour } => {
            let (y, m, d) = require_date(&date);
            print_pillar("Hour", hour_pillar(y, m, d, hour));
        }
        Commands::Elements { date, hour } => {
            let (y, m, d) = require_date(&date);
            let count = count_elements(&four_pillars(y, m, d, hour));
            for (e, w) in count.iter() {
                println!("{:<6} {:>4.1}", e.name(), w);
            }
            let gaps = missing_elements(&count);
            if !gaps.missing.is_empty() {
                let names: Vec<_> = gaps.missing.iter().map(|e| e.name()).collect();
                println!("Missing: {}", names.join(", "));
            }
            if !gaps.weak.is_empty() {
                let names: Vec<_> = gaps.weak.iter().map(|e| e.name()).collect();
                println!("Weak: {}", names.join(", "));
            }
        }
        Commands::Strength { date, hour } => {
            let (y, m, d) = require_date(&date);
            let info = day_master_strength(&four_pillars(y, m, d, hour));
            println!(
                "Day Master {} ({}) - {} ({}), ratio {:.3} (support {:.1}, drain {:.1})",
                info.element.name(),
                info.element.chinese(),
                info.strength.name(),
                info.strength.chinese(),
                info.ratio,
                info.support,
                info.drain
            );
        }
        Commands::Personality { date, hour } => {
            let (y, m, d) = require_date(&date);
            let info = day_master_strength(&four_pillars(y, m, d, hour));
            let profile = personality_profile(info.element, info.strength);
            println!("Day Master: {} ({})", info.element.name(), info.strength.name());
            println!("Strengths : {}", profile.positive.join(", "));
            println!("Watch for : {}", profile.negative.join(", "));
            println!("Careers   : {}", profile.career);
            println!("Advice    : {}", profile.advice);
        }
        Commands::Fortune { zodiac, date } => {
            let z = require_zodiac(&zodiac);
            let (y, m, d) = require_date(&date);
            let r = daily_ratings(z, y, m, d);
            println!(
                "{} {} on {y}-{m:02}-{d:02} (day {})",
                z.animal_emoji(),
                z.animal(),
                r.day_pillar.chinese()
            );
            println!("Wealth  {}", stars(r.wealth));
            println!("Love    {}", stars(r.love));
            println!("Career  {}", stars(r.career));
            println!("Health  {}", stars(r.health));
            println!("Overall {}", stars(r.overall));
            println!(
                "{} ({}) - {}",
                r.relation.name(),
                r.relation.chinese(),
                r.relation.description()
            );
        }
        Commands::Relation { first, second } => {
            let a = require_zodiac(&first);
            let b = require_zodiac(&second);
            let r = branch_relation(a, b);
            println!(
                "{} vs {}: {} ({}), modifier {}",
                a.animal(),
                b.animal(),
                r.name(),
                r.chinese(),
                r.modifier()
            );
            println!("{}", r.description());
        }
        Commands::LuckyHours { date } => {
            let (y, m, d) = require_date(&date);
            for h in lucky_hours(y, m, d) {
                println!(
                    "{} ({}) {} - {}",
                    h.double_hour.chinese,
                    h.branch.animal(),
                    h.branch.chinese(),
                    h.double_hour.time_range()
                );
            }
        }
        Commands::Almanac { date } => {
            let (y, m, d) = require_date(&date);
            let a = daily_almanac(y, m, d);
            println!(
                "{} ({}) - {} {}",
                a.day_pillar.chinese(),
                a.day_pillar.name(),
                a.polarity.name(),
                a.day_element.name()
            );
            println!("Do   : {}", a.do_items.join("; "));
            println!("Don't: {}", a.dont_items.join("; "));
        }
        Commands::Tip { zodiac, date } => {
            let z = require_zodiac(&zodiac);
            let (y, m, d) = require_date(&date);
            println!("{}", feng_shui_tip(y, m, d, z));
        }
        Commands::YearFortune { zodiac, year } => {
            let z = require_zodiac(&zodiac);
            let f = year_fortune(z, year);
            println!(
                "{} {} in {year} ({}): luck {}",
                z.animal_emoji(),
                z.animal(),
                f.year_pillar.chinese(),
                stars(f.luck)
            );
            println!(
                "Relation: {} ({}) - {}",
                f.relation.name(),
                f.relation.chinese(),
                f.relation.description()
            );
        }
        Commands::Kua { year, gender } => {
            let g = require_gender(&gender);
            let kua = kua_number(year, g);
            let dirs = kua_directions(kua);
            println!("Kua {kua} ({} group)", dirs.group.name());
            println!("Auspicious  : {}", dirs.auspicious.join(", "));
            println!("Inauspicious: {}", dirs.inauspicious.join(", "));
        }
        Commands::Zodiac { year } => {
            let z = zodiac_from_year(year);
            println!(
                "{} {} ({}) - {} element",
                z.animal_emoji(),
                z.animal(),
                z.chinese(),
                z.element().name()
            );
        }
        Commands::Generate {
            start,
            days,
            zodiac,
            output,
        } => {
            let (y, m, d) = require_date(&start);
            let signs: Vec<Branch> = match zodiac {
                Some(s) => vec![require_zodiac(&s)],
                None => ALL_BRANCHES.to_vec(),
            };
            generate_fortunes(&signs, y, m, d, days, &output);
        }
    }
}

fn stars(n: u8) -> String {
    let filled = usize::from(n.min(5));
    format!("{}{} ({n}/5)", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Materialize per-zodiac fortune records as `fortunes-<animal>.json`.
fn generate_fortunes(
    signs: &[Branch],
    year: i64,
    month: i64,
    day: i64,
    days: i64,
    output: &PathBuf,
) {
    if let Err(e) = fs::create_dir_all(output) {
        eprintln!("Failed to create {}: {e}", output.display());
        std::process::exit(1);
    }

    let start_jdn = julian_day_number(year, month, day);
    for &zodiac in signs {
        let mut records = Vec::with_capacity(days.max(0) as usize);
        for offset in 0..days {
            let (y, m, d) = calendar_from_jdn(start_jdn + offset);
            records.push(fortune_record(zodiac, y, m, d));
        }
        let day_count = records.len();
        let doc = serde_json::json!({
            "zodiac": zodiac.animal().to_lowercase(),
            "emoji": zodiac.animal_emoji(),
            "element": zodiac.element().name(),
            "generated": format!("{year:04}-{month:02}-{day:02}"),
            "days": day_count,
            "fortunes": records,
        });

        let path = output.join(format!("fortunes-{}.json", zodiac.animal().to_lowercase()));
        let body = serde_json::to_string_pretty(&doc).unwrap_or_else(|e| {
            eprintln!("Failed to serialize {}: {e}", zodiac.animal());
            std::process::exit(1);
        });
        if let Err(e) = fs::write(&path, body) {
            eprintln!("Failed to write {}: {e}", path.display());
            std::process::exit(1);
        }
        println!("Wrote {} ({} days)", path.display(), day_count);
    }
}

fn fortune_record(zodiac: Branch, y: i64, m: i64, d: i64) -> serde_json::Value {
    let r = daily_ratings(zodiac, y, m, d);
    let a = daily_almanac(y, m, d);
    let hours: Vec<_> = lucky_hours(y, m, d)
        .into_iter()
        .map(|h| {
            serde_json::json!({
                "branch": h.branch.chinese(),
                "name": h.double_hour.chinese,
                "animal": h.branch.animal(),
                "timeRange": h.double_hour.time_range(),
            })
        })
        .collect();

    serde_json::json!({
        "date": format!("{y:04}-{m:02}-{d:02}"),
        "pillar": r.day_pillar.chinese(),
        "pillarName": r.day_pillar.name(),
        "ratings": {
            "wealth": r.wealth,
            "love": r.love,
            "career": r.career,
            "health": r.health,
            "overall": r.overall,
        },
        "dayElement": r.day_element.name(),
        "zodiacElement": r.zodiac_element.name(),
        "relation": r.relation.name(),
        "relationDescription": r.relation.description(),
        "luckyHours": hours,
        "do": a.do_items,
        "dont": a.dont_items,
        "tip": feng_shui_tip(y, m, d, zodiac),
    })
}
