//! # chatcorpus CLI
//!
//! Command-line interface for the chatcorpus library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatcorpus::CorpusError;
use chatcorpus::cli::{Args, DEFAULT_OUTPUT};
use chatcorpus::config::CorpusConfig;
use chatcorpus::core::{FilterConfig, OutputConfig, build_corpus};
use chatcorpus::format::{OutputFormat, write_to_format};
use chatcorpus::parser::{Platform, create_parser};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), CorpusError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let config = load_config(&args)?;
    if args.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let (Some(source), Some(input)) = (args.source, args.input.as_deref()) else {
        return Err(CorpusError::invalid_format(
            "arguments",
            "a source and an input file are required",
        ));
    };

    let format: OutputFormat = args.format.into();
    let output_path = adjust_output_extension(&args.output, format);

    // Print header
    println!("📦 chatcorpus v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📖 Source:  {}", source);
    println!("📂 Input:   {}", input);
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", format);
    println!("🧵 Gap:     {} min", config.thread_gap_minutes);
    if let Some(ref path) = args.config {
        println!("⚙️  Config:  {}", path);
    }

    // Build filter configuration
    let mut filter_config = FilterConfig::new();

    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
        println!("📅 After:   {}", after);
    }

    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
        println!("📅 Before:  {}", before);
    }

    if args.since_first_quote {
        filter_config = filter_config.with_since_first_quote(config.quote_marker.clone());
        println!("💬 Window:  since first quote");
    }

    println!();

    // Step 1: Parse
    let parser = create_parser(Platform::from(source));
    println!("⏳ Parsing {}...", parser.name());
    let parse_start = Instant::now();
    let messages = parser.parse(Path::new(input))?;
    println!(
        "   Found {} messages ({:.2}s)",
        messages.len(),
        parse_start.elapsed().as_secs_f64()
    );

    // Step 2: Normalize, segment, group, link
    println!("🔍 Building corpus...");
    let build_start = Instant::now();
    let corpus = build_corpus(&messages, &config, &filter_config)?;
    println!(
        "   {} pairs from {} groups ({:.2}s)",
        corpus.len(),
        corpus.stats.group_count,
        build_start.elapsed().as_secs_f64()
    );

    // Step 3: Write
    let mut output_config = OutputConfig::new();
    if args.ids {
        output_config = output_config.with_ids();
    }

    println!("💾 Writing {}...", format);
    let write_start = Instant::now();
    write_to_format(&corpus.pairs, &output_path, format, &output_config)?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    println!();
    println!("✅ Done! Corpus saved to {}", output_path);

    // Summary
    let stats = &corpus.stats;
    println!();
    println!("📊 Summary:");
    println!("   Messages:   {}", stats.input_count);
    if filter_config.is_active() {
        println!("   In window:  {}", stats.filtered_count);
    }
    println!(
        "   Dropped:    {} (bots {}, quotes {}, commands {}, empty {})",
        stats.dropped.total(),
        stats.dropped.bot,
        stats.dropped.quote,
        stats.dropped.command,
        stats.dropped.empty
    );
    println!("   Kept:       {}", stats.normalized_count);
    println!("   Threads:    {}", stats.thread_count);
    println!(
        "   Groups:     {} ({:.1}% merged)",
        stats.group_count,
        stats.grouping_ratio()
    );
    println!("   Pairs:      {}", stats.pair_count);
    if stats.dangling_parents > 0 {
        println!("   ⚠️  Dangling: {}", stats.dangling_parents);
    }
    if stats.out_of_order > 0 {
        println!("   ⚠️  Out of order timestamps: {}", stats.out_of_order);
    }

    // Performance stats
    let total_time = total_start.elapsed();
    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    let msgs_per_sec = stats.input_count as f64 / total_time.as_secs_f64();
    println!("   Throughput:  {:.0} messages/sec", msgs_per_sec);

    Ok(())
}

/// Builds the effective configuration: file (or defaults), then CLI overrides.
fn load_config(args: &Args) -> Result<CorpusConfig, CorpusError> {
    let mut config = match args.config {
        Some(ref path) => CorpusConfig::from_json_file(path)?,
        None => CorpusConfig::default(),
    };

    if let Some(gap) = args.gap {
        config = config.with_thread_gap_minutes(gap);
    }
    if !args.tags.is_empty() {
        config = config.with_extra_tags(args.tags.iter().cloned());
    }
    if args.sort {
        config = config.with_sort_by_timestamp(true);
    }

    config.validate()?;
    Ok(config)
}

/// Adjusts output file extension based on format if using default output.
fn adjust_output_extension(output: &str, format: OutputFormat) -> String {
    if output != DEFAULT_OUTPUT {
        return output.to_string();
    }

    format!("corpus.{}", format.extension())
}
