mod paths;
mod render;
mod scenario;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use log::{info, warn};
use searchable_select::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::scenario::{DemoError, Scenario, Step};

fn init_logging() {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match File::create(&path) {
        Ok(file) => {
            if WriteLogger::init(LevelFilter::Debug, Config::default(), file).is_err() {
                eprintln!("logger already initialized");
            }
        }
        Err(e) => eprintln!("failed to create log file {}: {}", path.display(), e),
    }
}

fn scenario_path() -> Result<PathBuf, DemoError> {
    match std::env::args_os().nth(1) {
        Some(arg) => Ok(PathBuf::from(arg)),
        None => paths::default_scenario().ok_or(DemoError::NoScenario),
    }
}

fn print_pass(select: &SearchableSelect, state: &SelectState) -> Result<(), DemoError> {
    let menu = select.resolve(state)?;
    let control = select.control(state)?;
    println!("{}", render::control_line(&control));
    for line in render::menu_lines(&menu) {
        println!("  {line}");
    }
    Ok(())
}

fn run() -> Result<(), DemoError> {
    let path = scenario_path()?;
    info!("Loading scenario {}", path.display());
    let Scenario {
        config,
        mut state,
        tree,
        steps,
    } = Scenario::load(&path)?;

    let mut select = SearchableSelect::new(tree)
        .with_config(config)
        .on_select(|index, event| {
            info!("on_select({index:?}) attrs={:?} source={:?}", event.attrs(), event.source)
        })
        .on_search(|text, event| info!("on_search({text:?}) source={:?}", event.source));

    print_pass(&select, &state)?;

    for step in steps {
        println!("> {step:?}");
        match step {
            Step::Search(text) => {
                select.search(&text, SourceEvent::Input);
                state.apply_search(text);
            }
            Step::Click(index) => {
                let menu = select.resolve(&state)?;
                let event = MenuEvent::option(index, SourceEvent::Programmatic);
                match select.select(&menu, &event) {
                    Some(selected) => state.apply_selection(&selected),
                    None => warn!("click on {index} selected nothing"),
                }
            }
            Step::Reset => {
                let menu = select.resolve(&state)?;
                let event = MenuEvent::new(MenuTarget::Null, SourceEvent::Programmatic);
                if let Some(selected) = select.select(&menu, &event) {
                    state.apply_selection(&selected);
                }
            }
            Step::Loading(is_loading) => {
                let config = select.config().clone().with_loading(is_loading);
                select.set_config(config);
            }
        }
        print_pass(&select, &state)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
