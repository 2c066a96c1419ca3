/// 지금까지 확정된 입력을 화면에 다시 그리기 위한 누적 버퍼.
/// CLI 셸이 소유하며 계산 코드와는 관계가 없다.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// 조각들을 공백으로 이어 한 줄로 추가한다.
    pub fn push<I, S>(&mut self, parts: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let line = parts
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_parts_with_space() {
        let mut t = Transcript::new();
        t.push(["[+] OK:", "Марка провода: АС"]);
        t.push(["second"]);
        assert_eq!(t.lines().len(), 2);
        assert_eq!(t.render(), "[+] OK: Марка провода: АС\nsecond");
    }
}
