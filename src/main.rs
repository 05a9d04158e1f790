use std::path::PathBuf;

use anyhow::bail;
use clap::{command, Arg};
use docindex::{
    config::{DEFAULT_CATEGORY, DEFAULT_DOC_DIR, DEFAULT_EXTENSION, DEFAULT_LANDING_PAGE},
    generate, Config,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .args(&[
            Arg::new("doc_dir")
                .help("Directory path of documents")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(DEFAULT_DOC_DIR),
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Path of the index file. Defaults to search_index.json inside doc_dir. Existing file will be replaced.")
                .value_parser(clap::value_parser!(PathBuf)),
            Arg::new("extension")
                .long("extension")
                .help("File name suffix of documents")
                .default_value(DEFAULT_EXTENSION),
            Arg::new("landing_page")
                .long("landing-page")
                .help("File name of section landing pages (case-insensitive)")
                .default_value(DEFAULT_LANDING_PAGE),
            Arg::new("default_category")
                .long("default-category")
                .help("Category of documents which declare none")
                .default_value(DEFAULT_CATEGORY),
        ])
        .get_matches();

    let doc_dir: &PathBuf = matches.get_one("doc_dir").unwrap();
    if !doc_dir.exists() || !doc_dir.is_dir() {
        bail!("doc_dir must be a directory.");
    }

    let mut config = Config::new(doc_dir.to_owned())
        .with_extension(matches.get_one::<String>("extension").unwrap())
        .with_landing_page(matches.get_one::<String>("landing_page").unwrap())
        .with_default_category(matches.get_one::<String>("default_category").unwrap());
    if let Some(output) = matches.get_one::<PathBuf>("output") {
        config = config.with_output(output.to_owned());
    }

    let count = generate(&config)?;

    println!("Search index generated successfully.");
    println!("Documents indexed: {count}");

    Ok(())
}
