//! 예외 규칙 엔진
//!
//! 이름 붙은 규칙을 고정 순서로 평가해, 처음 매칭된 규칙이 해당
//! 윈도우의 변환을 전담합니다. 선언 순서가 곧 우선순위이며, 이 순서는
//! 이 타입의 문서화된 불변 규약입니다. 원본 패턴 중 전후방 탐색이
//! 필요한 조건은 명시적 스캐너 함수로 풀어 씁니다.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConvertError;
use crate::numerals::tables::{
    currency_word, is_currency_symbol, is_hangul_syllable, sino_digit, spelled_number,
};
use crate::numerals::{
    read_digits_sino, read_digits_spelled, read_dotted_digits, read_native, read_sino,
};
use crate::rules::{first_num, replace_nums};
use crate::window::Window;

/// 예외 규칙 종류 (평가 우선순위 순)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// 차량류 명사 + "대" → 고유어
    VehicleCount,
    /// "번째" → 고유어 서수형
    OrdinalRank,
    /// 기기/브랜드 약칭 뒤의 숫자 → 영어식 한 자리씩
    DeviceModel,
    /// 3G/4G/5G → 영어식 한 자리씩
    MobileNetwork,
    /// 전화번호 형태 → 한자어 한 자리씩
    PhoneNumber,
    /// 화폐 기호 → 한자어 묶음 읽기 + 화폐 말 추가
    Currency,
    /// "6 월"/"10 월" → 유/시 축약
    SpecialMonth,
    /// 한 자리·두 자리 기념일 (3·1 등) → 한 자리씩
    AnniversaryDate,
    /// YYYY.M.D / YYYY-M-D → 년/월/일 삽입
    FullDate,
    /// "1 만" 류의 1 생략
    ImplicitTenThousand,
    /// 숫자 + 영어 외래어 → 영어식
    EnglishCount,
    /// 항공편 → 한자어 한 자리씩
    FlightNumber,
    /// 모델명 (X-1 등) → 한자어 한 자리씩
    ModelCode,
    /// 번호/전화/코드 근처의 세 자리 이상 → 한자어 한 자리씩
    ReferenceCode,
    /// 버전 문자열 → 한 자리씩 + "쩜"
    VersionNumber,
    /// "1+1" → 원 플러스 원
    OnePlusOne,
}

/// 규칙 적용 결과: 새 숫자 구간과, 화폐 규칙이 뒤에 붙일 화폐 말
#[derive(Debug)]
pub struct RuleOutcome {
    pub span: String,
    pub currency: Option<&'static str>,
}

static VEHICLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "(?:차량|객차|전기차|수소차|버스|헬리콥터|비행기|항공기|택시|외관|제품|장비|전투기|컴퓨터|기계|차|기기).*? 대(?:[^책]|$)",
    )
    .expect("차량 패턴")
});

static PHONE_DASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2,3}\s?-\s?\d{3,4}\s?-\s?\d{4}").expect("전화번호 패턴"));

static ANNIV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d\s?[·∙]\s?\d{2}").expect("기념일 패턴"));

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4}(?:\.|-)\d{1,2}(?:\.|-)\d{1,2}\b").expect("날짜 패턴"));

static ENGLISH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[12345679]\s?(?:season|아웃|-way|샷|[dk](?:[^a-zA-Z]|$)|스타(?:[^쉽]|$))")
        .expect("영어 수량 패턴")
});

static FLIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:행|비행기|[a-zA-Z]|항공) \d+ 편?").expect("항공편 패턴"));

static MODEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[a-zA-Z]|\d{3,})-\d").expect("모델명 패턴"));

static REFCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:번호|전화|코드).{0,4}\d{3,}").expect("예약번호 패턴"));

static VERSION_AT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d\.\d+\.\d").expect("버전 패턴"));

/// 윈도우에 대해 규칙을 우선순위 순으로 평가
///
/// 가드 조건에 걸리면 (원본과 동일하게) 이후 규칙을 더 보지 않고
/// 기본 경로로 넘깁니다.
pub fn match_rule(w: &Window) -> Option<RuleKind> {
    let total = w.full();

    if VEHICLE_RE.is_match(&total) {
        return Some(RuleKind::VehicleCount);
    }
    if w.right.contains("번째") {
        return Some(RuleKind::OrdinalRank);
    }
    if matches_device_left(&w.left) {
        // 블록/퍼센트 문맥의 A는 기기명이 아님
        if w.left.contains('A')
            && (total.contains("블록") || total.contains("블럭") || total.contains('%'))
        {
            return None;
        }
        return Some(RuleKind::DeviceModel);
    }
    if matches_network(&w.span) {
        return Some(RuleKind::MobileNetwork);
    }
    if matches_phone(&w.span) {
        return Some(RuleKind::PhoneNumber);
    }
    if total.chars().any(is_currency_symbol) {
        return Some(RuleKind::Currency);
    }
    if total.contains("6 월") || total.contains("10 월") {
        return Some(RuleKind::SpecialMonth);
    }
    if ANNIV_RE.is_match(&w.span) {
        return Some(RuleKind::AnniversaryDate);
    }
    if DATE_RE.is_match(&w.span) {
        return Some(RuleKind::FullDate);
    }
    if matches_implicit_one(&total) {
        return Some(RuleKind::ImplicitTenThousand);
    }
    if ENGLISH_RE.is_match(&total) {
        return Some(RuleKind::EnglishCount);
    }
    if FLIGHT_RE.is_match(&total) {
        return Some(RuleKind::FlightNumber);
    }
    if MODEL_RE.is_match(&total) {
        return Some(RuleKind::ModelCode);
    }
    if REFCODE_RE.is_match(&total) {
        // 오른쪽 문맥이 대/호/번/후반이고 0으로 시작하지 않으면 수량으로 취급
        let defer = ["대", "호", "번", "후반"]
            .iter()
            .any(|s| w.right.contains(s))
            && first_num(&w.span).map(|n| !n.starts_with('0')).unwrap_or(false);
        if defer {
            return None;
        }
        return Some(RuleKind::ReferenceCode);
    }
    if matches_version(&total) {
        return Some(RuleKind::VersionNumber);
    }
    if w.span.contains("1+1") {
        return Some(RuleKind::OnePlusOne);
    }
    None
}

/// 매칭된 규칙으로 숫자 구간을 변환
pub fn apply_rule(kind: RuleKind, w: &Window) -> Result<RuleOutcome, ConvertError> {
    let mut span = w.span.clone();
    let mut currency = None;

    match kind {
        RuleKind::VehicleCount => {
            span = replace_nums(&span, |n| read_native(n, false))?;
        }
        RuleKind::OrdinalRank => {
            span = replace_nums(&span, |n| read_native(n, true))?;
        }
        RuleKind::DeviceModel | RuleKind::MobileNetwork => {
            while let Some(n) = first_num(&span) {
                let before = digit_count(&span);
                if has_mixed_flank(&span, &n) || n.contains('.') || n.contains(',') {
                    span = span.replace(&n, &read_sino(&n)?);
                } else if n.starts_with('0')
                    || n.len() > 2
                    || n.parse::<u32>().map(|v| v > 11).unwrap_or(true)
                {
                    span = read_digits_sino(&span)?;
                } else {
                    let word = spelled_number(&n)
                        .ok_or_else(|| malformed(&span, "영어식 테이블 범위 밖"))?;
                    span = span.replace(&n, word);
                }
                ensure_progress(&span, before)?;
            }
        }
        RuleKind::PhoneNumber
        | RuleKind::FlightNumber
        | RuleKind::ModelCode
        | RuleKind::ReferenceCode => {
            span = read_digits_sino(&span)?;
        }
        RuleKind::Currency => {
            span = replace_nums(&span, read_sino)?;
            let cur = span
                .chars()
                .find(|&c| is_currency_symbol(c))
                .ok_or_else(|| malformed(&span, "구간에 화폐 기호가 없음"))?;
            span = span.replace(cur, "");
            currency = currency_word(cur);
        }
        RuleKind::SpecialMonth => {
            while let Some(n) = first_num(&span) {
                let before = digit_count(&span);
                if n == "6" || n == "10" {
                    let word = if span.contains('6') { "유" } else { "시" };
                    span = span.replace(&n, word);
                } else {
                    span = span.replace(&n, &read_sino(&n)?);
                }
                ensure_progress(&span, before)?;
            }
        }
        RuleKind::AnniversaryDate => {
            while let Some(n) = first_num(&span) {
                let before = digit_count(&span);
                let repl = if n.chars().count() == 2 {
                    let mut word = String::new();
                    for c in n.chars() {
                        word.push_str(sino_digit(c)?);
                    }
                    word
                } else {
                    read_sino(&n)?
                };
                span = span.replace(&n, &repl);
                ensure_progress(&span, before)?;
            }
        }
        RuleKind::FullDate => {
            span = read_full_date(&span)?;
        }
        RuleKind::ImplicitTenThousand => {
            while let Some(n) = first_num(&span) {
                let before = digit_count(&span);
                if n == "1" {
                    span = span.replacen('1', "", 1);
                } else {
                    let word = read_sino(&n)?;
                    span = span.replacen(&n, &word, 1);
                }
                ensure_progress(&span, before)?;
            }
        }
        RuleKind::EnglishCount => {
            span = read_digits_spelled(&span)?;
        }
        RuleKind::VersionNumber => {
            span = read_dotted_digits(&span)?;
        }
        RuleKind::OnePlusOne => {
            span = read_digits_spelled(&span)?;
            span = span.replace('+', " 플러스 ");
        }
    }

    Ok(RuleOutcome { span, currency })
}

/// 날짜 구간을 "N 년 N 월 N 일" 형태로 펼침
///
/// 원본과 동일하게 한 번만 수행하고 즉시 반환하며, 월 6/10은 유/시
/// 축약을 적용합니다 (점 구분 날짜에서만 6이 "유"가 됨).
fn read_full_date(span: &str) -> Result<String, ConvertError> {
    let date = DATE_RE
        .find(span)
        .ok_or_else(|| malformed(span, "날짜 패턴이 없음"))?
        .as_str();
    let parts: Vec<&str> = if date.contains('.') {
        date.split('.').collect()
    } else {
        date.split('-').collect()
    };
    if parts.len() != 3 {
        return Err(malformed(date, "년.월.일 세 부분이 아님"));
    }

    let year = read_sino(parts[0])?;
    let month = if parts[1] == "6" || parts[1] == "10" {
        if span.contains(".6.") { "유" } else { "시" }.to_string()
    } else {
        read_sino(parts[1])?
    };
    let day = read_sino(parts[2])?;

    let mut out = replace_with_next_char(span, parts[0], &format!("{} 년 ", year));
    out = replace_with_next_char(&out, parts[1], &format!("{} 월 ", month));
    out = out.replacen(parts[2], &format!("{} 일 ", day), 1);
    Ok(out)
}

/// `pat`와 그 바로 뒤 한 문자(구분자)를 함께 치환 (첫 번째만)
fn replace_with_next_char(s: &str, pat: &str, repl: &str) -> String {
    if let Some(i) = s.find(pat) {
        let rest = &s[i + pat.len()..];
        if let Some(c) = rest.chars().next() {
            let mut out = String::with_capacity(s.len() + repl.len());
            out.push_str(&s[..i]);
            out.push_str(repl);
            out.push_str(&rest[c.len_utf8()..]);
            return out;
        }
    }
    s.to_string()
}

const DEVICE_WORDS: &[&str] = &["인보이스", "아이폰", "갤럭시", "갤", "홍미", "홍노", "노트", "놋"];

/// 왼쪽 문맥이 기기/브랜드 약칭으로 끝나는지 확인
///
/// 약칭 앞이 영문자면 단어 중간이므로 제외합니다.
fn matches_device_left(left: &str) -> bool {
    let t = match left.chars().last() {
        Some(c) if c.is_whitespace() => &left[..left.len() - c.len_utf8()],
        _ => left,
    };
    for w in DEVICE_WORDS {
        if let Some(prefix) = t.strip_suffix(w) {
            if prefix.chars().last().map_or(true, |c| !c.is_ascii_alphabetic()) {
                return true;
            }
        }
    }
    if let Some(c) = t.chars().last() {
        if matches!(c.to_ascii_lowercase(), 's' | 'g' | 'v' | 'q' | 'a' | 'j' | 'k') {
            let prefix = &t[..t.len() - c.len_utf8()];
            return prefix.chars().last().map_or(true, |p| !p.is_ascii_alphabetic());
        }
    }
    false
}

/// 구간이 3G/4G/5G 형태를 담고 있는지 확인 (g 뒤 영문자·경로는 제외)
fn matches_network(span: &str) -> bool {
    let chars: Vec<char> = span.chars().collect();
    let len = chars.len();
    for i in 0..len {
        if !matches!(chars[i], '3' | '4' | '5') {
            continue;
        }
        let mut j = i + 1;
        if j < len && chars[j].is_whitespace() {
            j += 1;
        }
        if j >= len || chars[j].to_ascii_lowercase() != 'g' {
            continue;
        }
        let k = j + 1;
        if k < len {
            if chars[k].is_ascii_alphabetic() {
                continue;
            }
            if chars[k] == '/' && k + 1 < len && chars[k + 1].is_ascii_alphabetic() {
                continue;
            }
        }
        return true;
    }
    false
}

/// 전화번호 형태 확인: 구분자형 또는 "010 " 시작형
fn matches_phone(span: &str) -> bool {
    if PHONE_DASH_RE.is_match(span) {
        return true;
    }
    for (i, _) in span.match_indices("010") {
        let followed = span[i + 3..]
            .chars()
            .next()
            .map_or(false, |c| c.is_whitespace());
        if !followed {
            continue;
        }
        if let Some(p) = span[..i].chars().last() {
            if p.is_ascii_digit() || matches!(p, ']' | ',' | '.' | '-') {
                continue;
            }
        }
        return true;
    }
    false
}

/// " 1 " 뒤에 십/백/천/만이 오는지 확인 ("의 1 만"은 제외)
fn matches_implicit_one(total: &str) -> bool {
    for (i, _) in total.match_indices(" 1 ") {
        if !total[i + 3..].starts_with(['십', '백', '천', '만']) {
            continue;
        }
        if total[..i].chars().last() == Some('의') {
            continue;
        }
        return true;
    }
    false
}

/// 버전 문자열 확인: 숫자.숫자들.숫자, 단 앞이 숫자면 제외
fn matches_version(total: &str) -> bool {
    for (i, c) in total.char_indices() {
        if !c.is_ascii_digit() {
            continue;
        }
        if total[..i].chars().last().is_some_and(|p| p.is_ascii_digit()) {
            continue;
        }
        if VERSION_AT_RE.is_match(&total[i..]) {
            return true;
        }
    }
    false
}

/// 숫자 앞이 "한글+공백", 뒤가 (공백+)영문자인 혼합 문맥인지 확인
fn has_mixed_flank(span: &str, n: &str) -> bool {
    for (i, _) in span.match_indices(n) {
        let mut before = span[..i].chars().rev();
        if before.next() != Some(' ') {
            continue;
        }
        if !before.next().is_some_and(is_hangul_syllable) {
            continue;
        }
        let mut after = span[i + n.len()..].chars();
        match after.next() {
            Some(c) if c.is_ascii_alphabetic() => return true,
            Some(c) if c.is_whitespace() => {
                if after.next().is_some_and(|c2| c2.is_ascii_alphabetic()) {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(char::is_ascii_digit).count()
}

/// 규칙 처리 루프가 자릿수를 줄이지 못하면 중단
fn ensure_progress(span: &str, before: usize) -> Result<(), ConvertError> {
    if digit_count(span) >= before {
        return Err(ConvertError::NoProgress {
            passes: 0,
            window: span.to_string(),
        });
    }
    Ok(())
}

fn malformed(span: &str, detail: &str) -> ConvertError {
    ConvertError::MalformedSpan {
        span: span.to_string(),
        detail: detail.to_string(),
    }
}
