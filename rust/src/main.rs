use std::env;
use std::fs;
use std::process;

use chrono::Utc;
use serde_json::json;
use timeslug::{Interval, Mode, Wordlist, derive, generate};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct SlugOpts {
    seed: String,
    period: String,
    length: usize,
    mode: Mode,
    wordlist: Option<String>,
    window: usize,
    interval: Interval,
    json: bool,
}

impl Default for SlugOpts {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            period: Utc::now().format("%Y-%m-%d").to_string(),
            length: 3,
            mode: Mode::Mnemonic,
            wordlist: None,
            window: 7,
            interval: Interval::Day,
            json: false,
        }
    }
}

fn default_seed() -> String {
    env::var("TIMESLUG_SEED").unwrap_or_else(|_| "seedphrase".to_string())
}

fn init_tracing() {
    let level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_help() {
    eprintln!(
        "timeslug - deterministic time-rotating slug generator\n\n\
Usage:\n  timeslug derive [--seed <s>] [--period <p>] [--length <n>] [--mode bip39|obfuscated] [--wordlist <path>] [--json]\n  timeslug window [--seed <s>] [--anchor <time>] [--length <n>] [--window <n>] [--interval second|minute|hour|day|week] [--mode bip39|obfuscated] [--wordlist <path>] [--json]\n  timeslug selftest\n\n\
Environment:\n  TIMESLUG_SEED  default seed\n  LOG_LEVEL      log level when RUST_LOG is unset (default: warn)\n"
    );
}

fn take_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("missing value for {flag}"))
}

fn parse_flags(args: &[String], allow_window: bool) -> Result<SlugOpts, String> {
    let mut opts = SlugOpts::default();
    let mut i = 0;

    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--json" => {
                opts.json = true;
                i += 1;
                continue;
            }
            "--seed" => opts.seed = take_value(args, i, flag)?.to_string(),
            "--period" if !allow_window => opts.period = take_value(args, i, flag)?.to_string(),
            "--anchor" if allow_window => opts.period = take_value(args, i, flag)?.to_string(),
            "--length" => {
                opts.length = take_value(args, i, flag)?
                    .parse::<usize>()
                    .map_err(|_| "invalid integer for --length".to_string())?;
            }
            "--mode" => {
                opts.mode = take_value(args, i, flag)?
                    .parse()
                    .map_err(|e: timeslug::SlugError| e.to_string())?;
            }
            "--wordlist" => opts.wordlist = Some(take_value(args, i, flag)?.to_string()),
            "--window" if allow_window => {
                opts.window = take_value(args, i, flag)?
                    .parse::<usize>()
                    .map_err(|_| "invalid integer for --window".to_string())?;
            }
            "--interval" if allow_window => {
                opts.interval = take_value(args, i, flag)?
                    .parse()
                    .map_err(|e: timeslug::SlugError| e.to_string())?;
            }
            _ => return Err(format!("unknown flag: {flag}")),
        }
        i += 2;
    }

    Ok(opts)
}

fn load_wordlist(opts: &SlugOpts) -> Result<Option<Wordlist>, String> {
    match &opts.wordlist {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
            Wordlist::from_text(&text)
                .map(Some)
                .map_err(|e| format!("{path}: {e}"))
        }
        None => Ok(None),
    }
}

fn resolve_wordlist<'a>(opts: &SlugOpts, loaded: &'a Option<Wordlist>) -> Option<&'a Wordlist> {
    match (opts.mode, loaded) {
        (_, Some(list)) => Some(list),
        (Mode::Mnemonic, None) => Some(Wordlist::english()),
        (Mode::Synthetic, None) => None,
    }
}

fn run_derive(args: &[String]) -> Result<(), String> {
    let opts = parse_flags(args, false)?;
    let loaded = load_wordlist(&opts)?;
    let wordlist = resolve_wordlist(&opts, &loaded);

    let derived = derive(&opts.seed, &opts.period, opts.length, opts.mode, wordlist)
        .map_err(|e| e.to_string())?;

    if opts.json {
        let payload = json!({
            "slug": derived.slug,
            "period": opts.period,
            "hash": derived.hash,
            "mode": opts.mode,
        });
        println!(
            "{}",
            serde_json::to_string(&payload).map_err(|e| e.to_string())?
        );
    } else {
        println!("slug={}", derived.slug);
        println!("period={}", opts.period);
        println!("hash={}", derived.hash);
    }

    Ok(())
}

fn run_window(args: &[String]) -> Result<(), String> {
    let opts = parse_flags(args, true)?;
    let loaded = load_wordlist(&opts)?;
    let wordlist = resolve_wordlist(&opts, &loaded);

    let slugs = generate(
        &opts.seed,
        &opts.period,
        opts.length,
        opts.window,
        opts.interval,
        opts.mode,
        wordlist,
    )
    .map_err(|e| e.to_string())?;

    if opts.json {
        println!(
            "{}",
            serde_json::to_string(&slugs).map_err(|e| e.to_string())?
        );
    } else {
        for s in &slugs {
            println!("{}\t{}\t{}", s.period, s.slug, s.hash);
        }
    }

    Ok(())
}

fn run_selftest() -> Result<(), String> {
    let d = derive("seedphrase", "2026-02-03", 16, Mode::Synthetic, None)
        .map_err(|e| e.to_string())?;
    if d.slug != "trybeambold8" || d.hash != "5d3bf0d55db67ea2" {
        return Err(format!("selftest failed: got {}/{}", d.slug, d.hash));
    }
    let m = derive(
        "seedphrase",
        "2026-02-03",
        3,
        Mode::Mnemonic,
        Some(Wordlist::english()),
    )
    .map_err(|e| e.to_string())?;
    if m.slug != "exoticangryanswer" || m.hash != "50011c26d0" {
        return Err(format!("selftest failed: got {}/{}", m.slug, m.hash));
    }
    println!("ok");
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        print_help();
        process::exit(2);
    }

    if args[0] == "-h" || args[0] == "--help" || args[0] == "help" {
        print_help();
        return;
    }

    init_tracing();

    let cmd = args[0].as_str();
    let rest = &args[1..];

    let res = match cmd {
        "derive" => run_derive(rest),
        "window" => run_window(rest),
        "selftest" => run_selftest(),
        _ => Err(format!("unknown command: {}", cmd)),
    };

    if let Err(err) = res {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
