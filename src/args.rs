//! Command-line parsing for the simcheck binary.

use std::path::PathBuf;

pub struct ParsedArgs {
    pub submission_roots: Vec<PathBuf>,
    pub template_roots: Vec<PathBuf>,
    pub ignored_suffixes: Vec<String>,
    pub jobs: usize,
    pub show_help: bool,
}

impl Default for ParsedArgs {
    fn default() -> Self {
        Self {
            submission_roots: Vec::new(),
            template_roots: Vec::new(),
            ignored_suffixes: Vec::new(),
            jobs: 1,
            show_help: false,
        }
    }
}

/// Split a comma-separated list of paths, dropping empty segments.
fn parse_path_list(raw: &str) -> Vec<PathBuf> {
    raw.split(',')
        .filter_map(|segment| {
            let trimmed = segment.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(PathBuf::from(trimmed))
            }
        })
        .collect()
}

/// Split a comma-separated suffix list, lowercased for case-insensitive
/// matching. Leading dots are kept: these are filename endings, not
/// extensions, so bare names like `makefile` are valid entries.
fn parse_suffix_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|segment| {
            let trimmed = segment.trim().to_lowercase();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        })
        .collect()
}

/// Parse a worker count. Malformed values fall back silently to 1; zero is
/// clamped to 1.
fn parse_jobs(raw: &str) -> usize {
    raw.trim().parse::<usize>().unwrap_or(1).max(1)
}

pub fn parse_args(args: &[String]) -> Result<ParsedArgs, String> {
    let mut parsed = ParsedArgs::default();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "--help" | "-h" => {
                parsed.show_help = true;
                i += 1;
            }
            "-i" | "--ignored-suffixes" => {
                let next = args
                    .get(i + 1)
                    .ok_or_else(|| "-i/--ignored-suffixes requires a comma list".to_string())?;
                parsed.ignored_suffixes.extend(parse_suffix_list(next));
                i += 2;
            }
            _ if arg.starts_with("--ignored-suffixes=") => {
                let value = arg.trim_start_matches("--ignored-suffixes=");
                parsed.ignored_suffixes.extend(parse_suffix_list(value));
                i += 1;
            }
            _ if arg.starts_with("-i=") => {
                let value = arg.trim_start_matches("-i=");
                parsed.ignored_suffixes.extend(parse_suffix_list(value));
                i += 1;
            }
            "-t" | "--template-paths" => {
                let next = args
                    .get(i + 1)
                    .ok_or_else(|| "-t/--template-paths requires a comma list".to_string())?;
                parsed.template_roots.extend(parse_path_list(next));
                i += 2;
            }
            _ if arg.starts_with("--template-paths=") => {
                let value = arg.trim_start_matches("--template-paths=");
                parsed.template_roots.extend(parse_path_list(value));
                i += 1;
            }
            _ if arg.starts_with("-t=") => {
                let value = arg.trim_start_matches("-t=");
                parsed.template_roots.extend(parse_path_list(value));
                i += 1;
            }
            "-j" | "--jobs" => {
                // A missing or malformed value defaults to one worker.
                if let Some(next) = args.get(i + 1) {
                    if !next.starts_with('-') {
                        parsed.jobs = parse_jobs(next);
                        i += 2;
                        continue;
                    }
                }
                parsed.jobs = 1;
                i += 1;
            }
            _ if arg.starts_with("--jobs=") => {
                parsed.jobs = parse_jobs(arg.trim_start_matches("--jobs="));
                i += 1;
            }
            _ if arg.starts_with("-j=") => {
                parsed.jobs = parse_jobs(arg.trim_start_matches("-j="));
                i += 1;
            }
            _ if arg.starts_with('-') => {
                eprintln!("Ignoring unknown flag {}", arg);
                i += 1;
            }
            _ => {
                parsed.submission_roots.extend(parse_path_list(arg));
                i += 1;
            }
        }
    }

    if !parsed.show_help && parsed.submission_roots.is_empty() {
        return Err("expected a comma-separated list of submission roots".to_string());
    }

    Ok(parsed)
}
