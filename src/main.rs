use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use line_rating_toolbox::app::{self, AppError};
use line_rating_toolbox::i18n::{self, keys, Translator};
use line_rating_toolbox::reference;
use line_rating_toolbox::ui_cli::{Console, Status};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};

#[derive(Parser)]
#[command(
    name = "line_rating_toolbox",
    about = "Допустимые токи (ДДТН/АДТН) и мощность ВЛ по марке провода"
)]
struct Args {
    /// 참조 데이터 파일(XML 또는 .toml). 없으면 내장 데이터 사용
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// 언어: auto, ru, en, ko
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// 색상과 화면 지우기를 끈다
    #[arg(long)]
    no_color: bool,
    /// 로그를 파일로 기록한다
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// 디버그 로그까지 출력
    #[arg(short, long)]
    verbose: bool,
}

/// 프로그램의 엔트리 포인트. 참조 데이터를 로드한 뒤 CLI 계산을 실행한다.
fn main() -> ExitCode {
    let args = Args::parse();
    let lang = i18n::resolve_language(&args.lang);
    let tr = Translator::new_with_pack(&lang, None);
    let mut console = Console::new(&tr, !args.no_color);
    init_logging(&args, &console);

    let data = match reference::load(args.config.as_deref()) {
        Ok(data) => data,
        Err(err) => {
            log::error!("{err}");
            console.print_status(Status::Fail, format!("{} {err}", tr.t(keys::CONFIG_ERROR)));
            return ExitCode::FAILURE;
        }
    };

    match app::run(&data, &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Rating(err)) => {
            console.print_status(Status::Fail, format!("{} {err}", tr.t(keys::CALC_ERROR)));
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("{err}");
            console.print_status(Status::Fail, err);
            ExitCode::FAILURE
        }
    }
}

/// `--log-file`을 열지 못하면 상태 줄을 남기고 stderr 로거로 돌아간다.
fn init_logging(args: &Args, console: &Console) {
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Some(path) = &args.log_file {
        let opened = open_log_file(path).and_then(|file| {
            WriteLogger::init(level.max(LevelFilter::Info), log_config.clone(), file)
                .map_err(|err| format!("{}: {err}", path.display()))
        });
        match opened {
            Ok(()) => return,
            Err(reason) => console.print_status(
                Status::Fail,
                format!("{} {reason}", console.tr().t(keys::LOG_FILE_ERROR)),
            ),
        }
    }
    let _ = TermLogger::init(level, log_config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn open_log_file(path: &Path) -> Result<File, String> {
    File::create(path).map_err(|err| format!("{}: {err}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_in_missing_directory_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("rating.log");
        let reason = open_log_file(&path).unwrap_err();
        assert!(reason.starts_with(&path.display().to_string()));
    }

    #[test]
    fn log_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rating.log");
        assert!(open_log_file(&path).is_ok());
        assert!(path.exists());
    }
}
