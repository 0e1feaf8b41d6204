//! Process command implementation

use crate::commands::Function;
use crate::config::{load_config, Overrides};
use crate::error::CliError;
use crate::input::{InputKind, Prompt};
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Parser;
use farasa_core::{batch, Farasa, FarasaConfig, FarasaError, JarRunner, Operation};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Arguments of the `farasa` command
#[derive(Debug, Parser)]
#[command(
    name = "farasa",
    version,
    about = "Arabic segmentation and POS tagging with the Farasa toolkit",
    long_about = "Arabic segmentation and POS tagging with the Farasa toolkit.\n\n\
        Give a folder as input path to process every file in it; the results \
        are written under the same names into the output folder."
)]
pub struct ProcessArgs {
    /// Function to run
    #[arg(short, long, value_enum)]
    pub func: Option<Function>,

    /// Path to the input file (or folder, for batch processing)
    #[arg(short, long, value_name = "PATH")]
    pub inpath: Option<PathBuf>,

    /// Path to the output file (or folder, for batch processing)
    #[arg(short, long, value_name = "PATH")]
    pub outpath: Option<PathBuf>,

    /// Remove all non-Arabic text
    #[arg(short, long = "ditch_non_Arabic", alias = "ditch-non-arabic")]
    pub ditch_non_arabic: bool,

    /// Re-connect ta marbuta to the preceding token
    #[arg(short, long = "restore_ta_marbuta", alias = "restore-ta-marbuta")]
    pub restore_ta_marbuta: bool,

    /// Use this character to mark prefixes and suffixes after segmentation
    #[arg(
        short,
        long = "split_char",
        alias = "split-char",
        value_name = "CHAR",
        allow_hyphen_values = true
    )]
    pub split_char: Option<String>,

    /// Configuration file (default: ./farasa.toml when present)
    #[arg(short, long, value_name = "FILE", env = "FARASA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory containing the Farasa jar files
    #[arg(long, value_name = "DIR", env = "FARASA_JAR_DIR")]
    pub jar_dir: Option<PathBuf>,

    /// Java launcher used to run the jars
    #[arg(long, value_name = "PROGRAM", env = "FARASA_JAVA")]
    pub java: Option<String>,

    /// Stop batch processing at the first failing file
    #[arg(long)]
    pub fail_fast: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Fully resolved arguments, after prompting
#[derive(Debug)]
struct Job {
    operation: Operation,
    inpath: PathBuf,
    outpath: PathBuf,
}

impl ProcessArgs {
    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting Farasa");
        log::debug!("Arguments: {:?}", self);

        let config = self.resolve_config()?;
        let job = self.resolve_job(&config, &mut Prompt::terminal())?;
        let farasa = Farasa::from_config(&config)?;

        match InputKind::classify(&job.inpath)? {
            InputKind::File => {
                farasa
                    .run(&job.operation, &job.inpath, &job.outpath)
                    .inspect_err(|e| warn_toolkit(&farasa, e))?;
                log::info!("Successfully processed: {}", job.inpath.display());
                Ok(())
            }
            InputKind::Directory => self.run_batch(&farasa, &job, &config),
        }
    }

    /// Configuration file merged with the command-line flags
    fn resolve_config(&self) -> Result<FarasaConfig> {
        let mut config = load_config(self.config.as_deref())?;
        self.overrides().apply(&mut config);
        Ok(config)
    }

    fn overrides(&self) -> Overrides {
        Overrides {
            java: self.java.clone(),
            jar_dir: self.jar_dir.clone(),
            restore_ta_marbuta: self.restore_ta_marbuta,
            ditch_non_arabic: self.ditch_non_arabic,
            split_char: self.split_char.clone(),
            fail_fast: self.fail_fast,
        }
    }

    /// Fill in what was not given on the command line
    fn resolve_job<R: BufRead, W: Write>(
        &self,
        config: &FarasaConfig,
        prompt: &mut Prompt<R, W>,
    ) -> Result<Job> {
        let func = match self.func {
            Some(func) => func,
            None => {
                let answer =
                    prompt.ask("Please provide a function: `segment` or `POS_tag`", "--func")?;
                Function::parse(&answer).ok_or(CliError::UnknownFunction(answer))?
            }
        };

        let inpath = match &self.inpath {
            Some(path) => path.clone(),
            None => PathBuf::from(prompt.ask(
                "Please provide a path to an input file or folder",
                "--inpath",
            )?),
        };

        let outpath = match &self.outpath {
            Some(path) => path.clone(),
            None => PathBuf::from(prompt.ask(
                "Please provide a path to an output file or folder",
                "--outpath",
            )?),
        };

        let operation = match func {
            Function::Segment => Operation::Segment(config.segment.clone()),
            Function::PosTag => Operation::PosTag(config.pos_tag.clone()),
        };

        Ok(Job {
            operation,
            inpath,
            outpath,
        })
    }

    fn run_batch(
        &self,
        farasa: &Farasa<JarRunner>,
        job: &Job,
        config: &FarasaConfig,
    ) -> Result<()> {
        let files = batch::collect_input_files(&job.inpath)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let report = batch::process_files(
            &files,
            &job.outpath,
            config.batch.policy(),
            |input, output| {
                let name = display_name(input);
                let result = farasa.run(&job.operation, input, output);
                match &result {
                    Ok(()) => progress.file_completed(&name),
                    Err(_) => progress.file_failed(&name),
                }
                result
            },
        );

        let report = match report {
            Ok(report) => report,
            Err(e) => {
                progress.finish(1);
                warn_toolkit(farasa, &e);
                return Err(e.into());
            }
        };
        progress.finish(report.failures.len());

        if let Some(failure) = report.failures.iter().find(|f| f.error.is_external_tool()) {
            warn_toolkit(farasa, &failure.error);
        }

        if !report.is_success() {
            return Err(CliError::BatchFailed {
                failed: report.failures.len(),
                total: report.attempted(),
                details: report
                    .failures
                    .iter()
                    .map(|f| format!("{}: {}", display_name(&f.input), f.error))
                    .collect(),
            }
            .into());
        }

        log::info!(
            "Processed {} files into {}",
            report.processed.len(),
            job.outpath.display()
        );
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // a logger may already be installed when called from tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Where the toolkit was looked for, when `error` came from it
fn toolkit_hint(farasa: &Farasa<JarRunner>, error: &FarasaError) -> Option<String> {
    if !error.is_external_tool() {
        return None;
    }
    let toolkit = farasa.runner().toolkit();
    Some(format!(
        "Farasa was run with `{}` and the jars in '{}' (see --java and --jar-dir)",
        toolkit.java,
        toolkit.jar_dir.display()
    ))
}

fn warn_toolkit(farasa: &Farasa<JarRunner>, error: &FarasaError) {
    if let Some(hint) = toolkit_hint(farasa, error) {
        log::warn!("{hint}");
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
