use std::io;
use std::path::PathBuf;

use anyhow::Context;

use simcheck::scheduler::{run_comparisons, ReportSink};
use simcheck::template::TemplateCorpus;
use simcheck::{args, fs_utils, pairs};

const USAGE: &str = "simcheck - pairwise similarity checker for submissions\n\n\
Usage:\n  \
  simcheck <roots> [-i <suffixes>] [-t <template roots>] [-j <jobs>]\n\n\
Arguments:\n  \
  <roots>                        Comma-separated submission roots, scanned recursively\n\n\
Options:\n  \
  -i, --ignored-suffixes <list>  Comma-separated filename endings to skip (e.g. .mp4,.log)\n  \
  -t, --template-paths <list>    Comma-separated instructor template roots\n  \
  -j, --jobs <n>                 Worker count (default 1)\n  \
  -h, --help                     Show this help\n\n\
Example:\n  \
  simcheck Submissions -i .mp4,.png,.log,.o,makefile -t Template -j 4\n";

fn main() -> anyhow::Result<()> {
    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    let parsed = match args::parse_args(&raw_args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };
    if parsed.show_help {
        println!("{USAGE}");
        return Ok(());
    }

    let submissions = fs_utils::collect_files(&parsed.submission_roots, &parsed.ignored_suffixes)
        .context("scanning submission roots")?;
    let template_paths = if parsed.template_roots.is_empty() {
        Vec::new()
    } else {
        fs_utils::collect_files(&parsed.template_roots, &parsed.ignored_suffixes)
            .context("scanning template roots")?
    };

    println!("Loading template files:");
    for path in &template_paths {
        println!("{}", path.display());
    }
    println!();

    let corpus = TemplateCorpus::load(&template_paths);
    let pair_list: Vec<(PathBuf, PathBuf)> = pairs::combinations(submissions.len())
        .into_iter()
        .map(|(i, j)| (submissions[i].clone(), submissions[j].clone()))
        .collect();

    let cwd = std::env::current_dir().context("resolving working directory")?;
    let sink = ReportSink::new(io::stdout());
    run_comparisons(&pair_list, &corpus, parsed.jobs, &cwd, &sink);

    Ok(())
}
