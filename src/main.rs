mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod sbom_generation;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{
    DebianCopyrightReader, FileSystemReader, FileSystemWriter, Sha256FileHasher,
    DEFAULT_COPYRIGHT_DIR,
};
use adapters::outbound::formatters::SpdxJsonFormatter;
use adapters::outbound::process::{CommandRunner, DpkgClient, SbomnixRunner, DEFAULT_SBOMNIX_PATH};
use application::dto::{CombinedSbomRequest, ExternalSbomRequest, LocalSbomRequest, MergeRequest};
use application::use_cases::{
    GenerateCombinedSbomUseCase, GenerateExternalSbomUseCase, GenerateLocalSbomUseCase,
    MergeSbomsUseCase,
};
use cli::{diagnostic_line, prints_in_full, Cli, Commands, ProgressFlags};
use config::{discover_config, load_config_from_path, ConfigFile};
use owo_colors::OwoColorize;
use ports::outbound::{OutputPresenter, SbomFormatter};
use sbom_generation::domain::SpdxDocument;
use shared::error::ExitCode;
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;

type LocalUseCase = GenerateLocalSbomUseCase<
    DpkgClient,
    DebianCopyrightReader,
    Sha256FileHasher,
    StderrProgressReporter,
>;

fn main() {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here too
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            if prints_in_full(&e) {
                let _ = e.print();
            } else {
                eprintln!("{}", diagnostic_line(&e));
            }
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(execute(cli.command, &config))
}

/// Explicit `--config` must exist; otherwise the working directory is searched
fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(&std::env::current_dir()?)?.unwrap_or_default()),
    }
}

async fn execute(command: Commands, config: &ConfigFile) -> Result<()> {
    // Create adapters (Dependency Injection)
    let runner = CommandRunner::new(config.command_timeout());

    match command {
        Commands::Ubuntu(args) => {
            let request = local_request(args.include_files, &args.progress, config);
            let document = local_use_case(config, runner)?.execute(request).await?;
            write_document(&document, args.output)
        }
        Commands::Nix(args) => {
            let use_case = GenerateExternalSbomUseCase::new(
                sbomnix_runner(config, runner),
                StderrProgressReporter::new(),
            );
            use_case
                .execute(ExternalSbomRequest::new(args.target, args.output))
                .await
        }
        Commands::Merge(args) => {
            let use_case =
                MergeSbomsUseCase::new(FileSystemReader::new(), StderrProgressReporter::new())?;
            let outcome = use_case.execute(MergeRequest::new(args.ubuntu, args.nix))?;
            write_document(&outcome.document, args.output)
        }
        Commands::Combined(args) => {
            let local = local_request(args.include_files, &args.progress, config);
            let use_case = GenerateCombinedSbomUseCase::new(
                local_use_case(config, runner)?,
                sbomnix_runner(config, runner),
                FileSystemReader::new(),
            )?;
            let request =
                CombinedSbomRequest::new(args.nix_target, local.include_files, local.show_progress);
            let outcome = use_case.execute(request).await?;
            write_document(&outcome.document, args.output)
        }
    }
}

/// Command-line flags win over the config file; progress defaults to on
fn local_request(
    include_files: bool,
    progress: &ProgressFlags,
    config: &ConfigFile,
) -> LocalSbomRequest {
    LocalSbomRequest::new(
        include_files || config.include_files.unwrap_or(false),
        progress.resolve().or(config.progress).unwrap_or(true),
    )
}

fn local_use_case(config: &ConfigFile, runner: CommandRunner) -> Result<LocalUseCase> {
    let copyright_dir = config
        .copyright_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_COPYRIGHT_DIR));

    GenerateLocalSbomUseCase::new(
        DpkgClient::new(runner),
        DebianCopyrightReader::new(copyright_dir),
        Sha256FileHasher::new(),
        StderrProgressReporter::new(),
    )
}

fn sbomnix_runner(config: &ConfigFile, runner: CommandRunner) -> SbomnixRunner {
    let program = config
        .sbomnix_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SBOMNIX_PATH));
    SbomnixRunner::new(program, runner)
}

fn write_document(document: &SpdxDocument, output: PathBuf) -> Result<()> {
    let content = SpdxJsonFormatter::new().format(document)?;
    FileSystemWriter::new(output).present(&content)
}
