//! Synthetic DiscordChatExporter export generator for benchmarking chatcorpus.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_test.json

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use chrono::{Duration, TimeZone, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::json;

const AUTHORS: &[(&str, &str)] = &[
    ("100", "Alice"),
    ("101", "Bob"),
    ("102", "Čestmír"),
    ("103", "Žofie"),
    ("104", "Ondra"),
    ("105", "Mod ☠"),
];

const BOT: (&str, &str) = ("900", "Rythm");

const WORDS: &[&str] = &[
    "ahoj", "čau", "jak", "se", "máš", "dneska", "večer", "hraješ", "něco", "nevím", "možná",
    "proč", "ne", "jo", "určitě", "Příliš", "žluťoučký", "kůň", "úpěl", "ďábelské", "ódy",
];

const EMOJI_CODES: &[&str] = &[
    ":doubt:",
    ":OMEGALUL:",
    ":monke:",
];

const EMOJI_CHARS: &[&str] = &["🤔", "👌", "😂", "👍", "🔥"];

/// Gaps in minutes; most stay well inside a thread, a few end one.
const GAPS: &[i64] = &[0, 0, 1, 1, 2, 3, 5, 8, 12, 20, 29, 31, 45, 90, 600];

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_test.json");

    println!("🧪 Corpus test data generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!();

    generate_discord(count, output)
}

fn generate_discord(count: usize, output: &str) -> io::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file); // 1MB buffer

    let mut rng = rand::thread_rng();

    writeln!(writer, "{{")?;
    writeln!(writer, "  \"guild\": {{ \"id\": \"1\", \"name\": \"Test Guild\" }},")?;
    writeln!(writer, "  \"channel\": {{ \"id\": \"2\", \"name\": \"general\" }},")?;
    writeln!(writer, "  \"messages\": [")?;

    let start = std::time::Instant::now();
    let mut bytes_written: usize = 0;
    let mut clock = Utc.with_ymd_and_hms(2017, 1, 1, 8, 0, 0).single().unwrap_or_default();

    for i in 0..count {
        clock += Duration::minutes(*GAPS.choose(&mut rng).unwrap_or(&0))
            + Duration::seconds(rng.gen_range(0..60));

        let is_bot = rng.gen_ratio(1, 40);
        let (author_id, author_name) = if is_bot {
            BOT
        } else {
            *AUTHORS.choose(&mut rng).unwrap_or(&AUTHORS[0])
        };

        let record = json!({
            "id": (267_000_000_000_000_000_u64 + i as u64).to_string(),
            "type": "Default",
            "timestamp": clock.format("%Y-%m-%dT%H:%M:%S%.3f+00:00").to_string(),
            "timestampEdited": null,
            "isPinned": false,
            "content": generate_content(&mut rng, i),
            "author": {
                "id": author_id,
                "name": author_name,
                "discriminator": "0001",
                "isBot": is_bot,
            },
            "attachments": [],
            "embeds": [],
            "reactions": [],
        });

        let comma = if i + 1 < count { "," } else { "" };
        let line = format!("    {}{}", record, comma);
        bytes_written += line.len();
        writeln!(writer, "{}", line)?;

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                bytes_written as f64 / 1_000_000.0,
                (i + 1) as f64 / elapsed
            );
        }
    }

    writeln!(writer, "  ]")?;
    writeln!(writer, "}}")?;
    writer.flush()?;

    let elapsed = start.elapsed();
    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Speed: {:.0} msg/s",
        count as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}

fn sentence(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(1..=12);
    (0..len)
        .map(|_| *WORDS.choose(rng).unwrap_or(&"ahoj"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn generate_content(rng: &mut impl Rng, index: usize) -> String {
    match index % 20 {
        0..=9 => sentence(rng),
        10 => format!("{}?", sentence(rng)),
        11 => format!("{}!!", sentence(rng)),
        12 => format!(
            "{} {}",
            sentence(rng),
            EMOJI_CODES.choose(rng).unwrap_or(&EMOJI_CODES[0])
        ),
        13 => format!(
            "{}{}",
            EMOJI_CHARS.choose(rng).unwrap_or(&EMOJI_CHARS[0]),
            sentence(rng)
        ),
        14 => format!(
            "@{} {}",
            AUTHORS.choose(rng).map_or("Alice", |a| a.1),
            sentence(rng)
        ),
        15 => format!("> {}", sentence(rng)),
        16 => format!("koukni https://example.com/{} {}", index, sentence(rng)),
        17 => ".play never gonna give you up".to_string(),
        18 => format!("@everyone {}", sentence(rng)),
        _ => String::new(),
    }
}
