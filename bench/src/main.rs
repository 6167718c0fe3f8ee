use std::time::{Duration, Instant};

use anyhow::Context as _;
use serde_json::json;

#[derive(Clone, Debug)]
struct BenchArgs {
    sizes: Vec<usize>,
    columns: usize,
    warmup: u32,
    repeats: u32,
    seed: u64,
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = parse_args()?;

    if args.sizes.is_empty() {
        anyhow::bail!("--sizes must name at least one feed size");
    }
    if args.columns == 0 {
        anyhow::bail!("--columns must be > 0");
    }
    if args.repeats == 0 {
        anyhow::bail!("--repeats must be > 0");
    }

    eprintln!(
        "bench: {repeats} run(s) per size ({profile} build), columns={columns}, seed={seed}",
        repeats = args.repeats,
        profile = if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        },
        columns = args.columns,
        seed = args.seed,
    );

    for &size in &args.sizes {
        let posts = synthetic_feed(size, args.seed);

        for _ in 0..args.warmup {
            let _ = gridfeed::compute_layout(&posts, args.columns);
        }

        let reference = gridfeed::compute_layout(&posts, args.columns);
        let mut runs = Vec::<Duration>::with_capacity(args.repeats as usize);
        for _ in 0..args.repeats {
            let start = Instant::now();
            let layout = gridfeed::compute_layout(&posts, args.columns);
            runs.push(start.elapsed());
            if layout != reference {
                anyhow::bail!("layout for {size} posts changed between runs");
            }
        }

        runs.sort_by_key(|d| d.as_nanos());
        let line = json!({
            "posts": size,
            "columns": args.columns,
            "max_bottom": reference.max_bottom,
            "degraded": reference.degraded_count(),
            "p50_ms": ms(percentile(&runs, 0.50)),
            "p90_ms": ms(percentile(&runs, 0.90)),
            "p99_ms": ms(percentile(&runs, 0.99)),
        });
        println!("{line}");
    }

    Ok(())
}

// Feed with a realistic type mix, newest first. xorshift keeps it reproducible per seed.
fn synthetic_feed(len: usize, seed: u64) -> Vec<gridfeed::Post> {
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let sizes = [
        gridfeed::DisplaySize::Auto,
        gridfeed::DisplaySize::Small,
        gridfeed::DisplaySize::Medium,
        gridfeed::DisplaySize::Large,
    ];
    (0..len)
        .map(|i| {
            let post_type = gridfeed::PostType::ALL[(next() % 7) as usize];
            let size = sizes[(next() % 4) as usize];
            gridfeed::Post::new(format!("post-{i}"), post_type)
                .with_size(size)
                .with_created_at((len - i) as i64)
        })
        .collect()
}

fn percentile(v: &[Duration], p: f64) -> Duration {
    if v.is_empty() {
        return Duration::ZERO;
    }
    let n = v.len();
    let rank = (p * (n as f64)).ceil().clamp(1.0, n as f64) as usize;
    v[rank - 1]
}

fn ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

fn parse_args() -> anyhow::Result<BenchArgs> {
    let mut args = std::env::args().skip(1);

    let mut out = BenchArgs {
        sizes: vec![60, 120, gridfeed::MAX_RESIDENT_POSTS],
        columns: gridfeed::GRID_COLUMNS,
        warmup: 3,
        repeats: 200,
        seed: 0x5eed,
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "--sizes" => {
                let v = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("missing value for --sizes (e.g. 60,120)"))?;
                out.sizes = v
                    .split(',')
                    .map(|s| {
                        s.trim()
                            .parse::<usize>()
                            .with_context(|| format!("parse --sizes entry '{s}'"))
                    })
                    .collect::<anyhow::Result<_>>()?;
            }
            "--columns" => out.columns = parse_usize(args.next(), "--columns")?,
            "--warmup" => out.warmup = parse_u32(args.next(), "--warmup")?,
            "--repeats" => out.repeats = parse_u32(args.next(), "--repeats")?,
            "--seed" => {
                let v = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("missing value for --seed"))?;
                out.seed = v
                    .parse::<u64>()
                    .with_context(|| format!("parse --seed value '{v}'"))?;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => anyhow::bail!("unknown arg '{a}' (try --help)"),
        }
    }

    Ok(out)
}

fn print_help() {
    eprintln!(
        r#"gridfeed-bench

Lays out synthetic feeds repeatedly and prints one JSON line per feed size with p50/p90/p99.

Usage:
  cargo run -q --release
  cargo run -q --release -- --sizes 60,240,480 --repeats 500

Args:
  --sizes N,N,...  (default 60,120,240)
  --columns N      (default 14)
  --warmup N       (default 3)
  --repeats N      (default 200)
  --seed N         (default 24301)
"#
    );
}

fn parse_u32(v: Option<String>, flag: &str) -> anyhow::Result<u32> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<u32>()
        .with_context(|| format!("parse {flag} value '{v}'"))
}

fn parse_usize(v: Option<String>, flag: &str) -> anyhow::Result<usize> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<usize>()
        .with_context(|| format!("parse {flag} value '{v}'"))
}
