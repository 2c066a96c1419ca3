use std::fmt::Display;
use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};

use crate::app::AppError;
use crate::i18n::{keys, Translator};
use crate::rating::{RenderableTable, Season};
use crate::session::{self, SelectionError};
use crate::transcript::Transcript;

const CELL: usize = 6;
const HEAD_WIDTH: usize = 48;

/// 상태 줄 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Fail,
}

/// 계절별 행 배경색.
pub fn season_color(season: Season) -> Color {
    match season {
        Season::Winter => Color::Cyan,
        Season::Nominal => Color::Yellow,
        Season::Summer => Color::Green,
    }
}

/// 터미널 입출력 담당. 확정된 입력은 `Transcript`에 쌓아 두고 화면을 다시 그린다.
pub struct Console<'a> {
    tr: &'a Translator,
    color: bool,
    transcript: Transcript,
}

impl<'a> Console<'a> {
    /// `color`가 false면 색과 화면 지우기를 모두 끈다.
    pub fn new(tr: &'a Translator, color: bool) -> Self {
        Self {
            tr,
            color,
            transcript: Transcript::new(),
        }
    }

    pub fn tr(&self) -> &'a Translator {
        self.tr
    }

    fn status_prefix(&self, status: Status) -> String {
        let (key, color) = match status {
            Status::Ok => (keys::MSG_OK, Color::Green),
            Status::Fail => (keys::MSG_FAIL, Color::Red),
        };
        let text = self.tr.t(key);
        if self.color {
            // "[+] OK:" 에서 괄호 부분은 그대로 두고 뒤쪽만 칠한다.
            match text.split_once(' ') {
                Some((mark, rest)) => format!("{mark} {}", rest.with(color).bold()),
                None => text.with(color).bold().to_string(),
            }
        } else {
            text.to_string()
        }
    }

    pub fn print_status(&self, status: Status, text: impl Display) {
        println!("{} {text}", self.status_prefix(status));
    }

    /// 확정된 입력을 기록하고 화면을 지운 뒤 지금까지의 기록을 다시 출력한다.
    pub fn memo(&mut self, label_key: &str, value: impl Display) -> Result<(), AppError> {
        let prefix = self.status_prefix(Status::Ok);
        let line = format!("{} {value}", self.tr.t(label_key));
        self.transcript.push([prefix, line]);
        if self.color {
            let mut out = io::stdout();
            execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
            println!("{}", self.transcript.render());
        } else if let Some(last) = self.transcript.lines().last() {
            println!("{last}");
        }
        Ok(())
    }

    fn print_head(&self, text: &str) {
        let delim = "*".repeat(HEAD_WIDTH);
        let inner = HEAD_WIDTH - 2;
        println!("{delim}\n*{text:^inner$}*\n{delim}\n");
    }

    /// 번호 목록을 보여주고 선택된 번호를 돌려준다.
    pub fn select<S: AsRef<str>>(&self, items: &[S], header_key: &str) -> Result<usize, AppError> {
        self.print_head(self.tr.t(header_key));
        let width = items.len().to_string().len() + 2;
        for (i, item) in items.iter().enumerate() {
            let pos = format!("{i:^width$}");
            let pos = if self.color {
                pos.with(Color::Magenta).to_string()
            } else {
                pos
            };
            println!("[{pos}] {}", item.as_ref());
        }
        loop {
            let input = read_line(&format!("\n{}", self.tr.t(keys::PROMPT_SELECT_NUMBER)))?;
            match session::parse_selection(&input, items.len()) {
                Ok(idx) => return Ok(idx),
                Err(SelectionError::EmptyList) => {
                    return Err(AppError::Selection(SelectionError::EmptyList))
                }
                Err(err) => self.print_selection_error(&err),
            }
        }
    }

    pub fn print_selection_error(&self, err: &SelectionError) {
        let tr = self.tr;
        let text = match err {
            SelectionError::NotANumber(s) => format!("{s} {}", tr.t(keys::INVALID_VALUE)),
            SelectionError::Negative => tr.t(keys::NUMBER_NEGATIVE).to_string(),
            SelectionError::OutOfRange { max } => {
                format!("{} {max}.", tr.t(keys::NUMBER_TOO_LARGE))
            }
            SelectionError::EmptyList => tr.t(keys::EMPTY_LIST).to_string(),
            SelectionError::NoCrossSections(descr) => {
                format!("{} {descr}", tr.t(keys::NO_CROSS_SECTIONS))
            }
        };
        self.print_status(Status::Fail, text);
    }

    /// 기본값을 보여주고 확인받는다. 거부하면 파싱에 성공할 때까지 새 값을 묻는다.
    pub fn confirm_or_override<T>(
        &self,
        question_key: &str,
        shown_default: impl Display,
        prompt_key: &str,
        default: T,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, AppError> {
        let question = format!(
            "\n{} {shown_default}. {}",
            self.tr.t(question_key),
            self.tr.t(keys::CONFIRM_SUFFIX)
        );
        let confirmed = session::is_confirmation(&read_line(&question)?);
        let value = if confirmed {
            None
        } else {
            Some(self.read_parsed(prompt_key, parse)?)
        };
        Ok(session::resolve_override(default, confirmed, value))
    }

    fn read_parsed<T>(&self, prompt_key: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T, AppError> {
        loop {
            let input = read_line(&format!("\n{}", self.tr.t(prompt_key)))?;
            match parse(&input) {
                Some(v) => return Ok(v),
                None => self.print_status(
                    Status::Fail,
                    format!("{} {}", input.trim(), self.tr.t(keys::INVALID_VALUE)),
                ),
            }
        }
    }

    pub fn print_table(&self, table: &RenderableTable<Season>) {
        println!();
        print!("{}", render_table(self.tr, table, self.color));
        println!();
    }

    /// 세 줄짜리 계절 범례.
    pub fn print_legend(&self) {
        for (season, key) in [
            (Season::Winter, keys::LEGEND_WINTER),
            (Season::Nominal, keys::LEGEND_NOMINAL),
            (Season::Summer, keys::LEGEND_SUMMER),
        ] {
            let swatch = if self.color {
                "  ".on(season_color(season)).to_string()
            } else {
                format!("[{}]", season.label())
            };
            println!("\t{swatch}{}", self.tr.t(key));
        }
        println!();
    }
}

/// 결과표를 상자 모양 텍스트로 만든다. `color`가 true면 계절 행에 배경색을 입힌다.
pub fn render_table(tr: &Translator, table: &RenderableTable<Season>, color: bool) -> String {
    let header = &table.header;
    let [temperature, long_duration, emergency] = header.captions.map(|key| tr.t(key));
    let rule = format!("+{}", "------+".repeat(8));
    let power_width = CELL * 5 + 4;
    let mut out = String::new();

    out.push_str(&format!("+{0}+{0}+{0}+{1}+\n", "-".repeat(CELL), "-".repeat(power_width)));
    out.push_str(&format!(
        "|{0:^CELL$}|{0:^CELL$}|{0:^CELL$}|{1:^power_width$}|\n",
        "",
        tr.t(header.power_caption)
    ));
    out.push_str(&format!(
        "|{temperature:^CELL$}|{long_duration:^CELL$}|{emergency:^CELL$}+{}\n",
        "------+".repeat(5)
    ));
    out.push_str(&format!("|{0:^CELL$}|{0:^CELL$}|{0:^CELL$}|", ""));
    for v in header.voltages_kv {
        out.push_str(&format!("{v:^CELL$}|"));
    }
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for row in &table.rows {
        let mut line = format!("|{:^CELL$}|", row.label);
        for v in row.values {
            line.push_str(&format!("{v:^CELL$}|"));
        }
        match row.annotation {
            Some(season) if color => {
                out.push_str(&line.on(season_color(season)).to_string());
            }
            _ => out.push_str(&line),
        }
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if n == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
    }
    Ok(buf)
}
