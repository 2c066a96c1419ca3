use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};

use super::error::MalformedReason;
use super::raw::{RawCoefficient, RawConductor, RawReference, RawScalar, RawSection};

/// 현재 열려 있는 1단계 그룹.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    Temperatures,
    Conductor,
}

/// XML 문서를 원시 계층으로 읽는다. 하위 요소의 태그 이름은 따지지 않는다.
pub(crate) fn read_xml(src: &str) -> Result<RawReference, MalformedReason> {
    let mut reader = Reader::from_str(src);
    reader.trim_text(true);

    let mut raw = RawReference::default();
    let mut seen_root = false;
    let mut group: Option<Group> = None;
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                open_element(e, depth, &mut group, &mut raw, &mut seen_root)?;
                depth += 1;
            }
            Event::Empty(ref e) => {
                open_element(e, depth, &mut group, &mut raw, &mut seen_root)?;
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 1 {
                    group = None;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(MalformedReason::MissingRoot);
    }
    Ok(raw)
}

fn open_element(
    e: &BytesStart,
    depth: usize,
    group: &mut Option<Group>,
    raw: &mut RawReference,
    seen_root: &mut bool,
) -> Result<(), MalformedReason> {
    match depth {
        0 => {
            *seen_root = true;
            raw.cos = attribute_value(e, "COS")?.map(RawScalar::Text);
            raw.du = attribute_value(e, "dU")?.map(RawScalar::Text);
        }
        1 => {
            let name = e.local_name();
            *group = match std::str::from_utf8(name.as_ref()).unwrap_or_default() {
                "TK" => Some(Group::Temperatures),
                "VL" => {
                    raw.vl.push(RawConductor {
                        m: attribute_value(e, "M")?,
                        s: Vec::new(),
                    });
                    Some(Group::Conductor)
                }
                _ => None,
            };
        }
        2 => match group {
            Some(Group::Temperatures) => raw.tk.push(RawCoefficient {
                t: attribute_value(e, "T")?.map(RawScalar::Text),
                k: attribute_value(e, "K")?.map(RawScalar::Text),
            }),
            Some(Group::Conductor) => {
                let section = RawSection {
                    s: attribute_value(e, "S")?.map(RawScalar::Text),
                    i: attribute_value(e, "I")?.map(RawScalar::Text),
                };
                if let Some(conductor) = raw.vl.last_mut() {
                    conductor.s.push(section);
                }
            }
            None => {}
        },
        _ => {}
    }
    Ok(())
}

/// 속성 이름은 대소문자를 구분한다. `cos=`는 `COS=`로 읽지 않는다.
fn attribute_value(event: &BytesStart, key: &str) -> Result<Option<String>, quick_xml::Error> {
    for attr in event.attributes().with_checks(false) {
        let attr = attr?;
        if attr.key.local_name().as_ref() == key.as_bytes() {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
