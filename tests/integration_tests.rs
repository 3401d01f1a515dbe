//! 전체 변환 파이프라인 통합 테스트

use num2kor::{convert, convert_lossy, convert_with_limit, ConvertError};

#[test]
fn test_plain_numbers_sino() {
    // 분류사가 없으면 한자어 묶음 읽기
    assert_eq!(convert("0").unwrap(), "영");
    assert_eq!(convert("20").unwrap(), "이십");
    assert_eq!(convert("123456789").unwrap(), "일억이천삼백사십오만육천칠백팔십구");
    assert_eq!(convert("1,234").unwrap(), "천이백삼십사");
    assert_eq!(convert("13.6").unwrap(), "십삼쩜육");
}

#[test]
fn test_native_counters() {
    // 고유어 분류사는 셈식으로
    assert_eq!(convert("사과 3 개").unwrap(), "사과 세 개");
    assert_eq!(convert("20 개").unwrap(), "스무 개");
    assert_eq!(convert("45 마리").unwrap(), "마흔다섯 마리");
    // 50 이상은 한자어로 넘어감
    assert_eq!(convert("50 개").unwrap(), "오십 개");
}

#[test]
fn test_clock_reading() {
    // 12시까지는 고유어, 13시부터는 한자어
    assert_eq!(convert("5 시").unwrap(), "다섯 시");
    assert_eq!(convert("13 시").unwrap(), "십삼 시");
    // "24 시간"의 24는 한자어 강제
    assert_eq!(convert("24 시간").unwrap(), "이십사 시간");
    assert_eq!(convert("3 시간").unwrap(), "세 시간");
}

#[test]
fn test_excluded_counter_suffix() {
    // "개국"은 "개"로 세지 않음
    assert_eq!(convert("17 개국").unwrap(), "십칠 개국");
    // "시즌"은 "시"로 세지 않으므로 한자어 기본 경로
    assert_eq!(convert("2 시즌").unwrap(), "이 시즌");
}

#[test]
fn test_vehicle_and_ordinal() {
    assert_eq!(convert("버스 3 대").unwrap(), "버스 세 대");
    assert_eq!(convert("1 번째").unwrap(), "첫 번째");
    assert_eq!(convert("21 번째").unwrap(), "스물첫 번째");
}

#[test]
fn test_device_and_network() {
    assert_eq!(convert("내 휴대폰은 갤8").unwrap(), "내 휴대폰은 갤에잇");
    assert_eq!(convert("아이폰 15").unwrap(), "아이폰 일오");
    assert_eq!(convert("3G 시대").unwrap(), "쓰리G 시대");
}

#[test]
fn test_phone_number() {
    assert_eq!(
        convert("010 1234 5678").unwrap(),
        "공일공 일이삼사 오육칠팔"
    );
    assert_eq!(
        convert("010-1234-5678").unwrap(),
        "공일공-일이삼사-오육칠팔"
    );
}

#[test]
fn test_currency() {
    assert_eq!(convert("$5").unwrap(), "오 달러");
    assert_eq!(convert("￦5,000").unwrap(), "오천 원");
}

#[test]
fn test_full_date() {
    // 점 구분 날짜에서 6월은 "유"
    assert_eq!(
        convert("2024.6.1").unwrap().trim_end(),
        "이천이십사 년 유 월 일 일"
    );
    // 대시 구분은 "시"로 읽는 동작 유지
    assert_eq!(
        convert("2024-6-1").unwrap().trim_end(),
        "이천이십사 년 시 월 일 일"
    );
}

#[test]
fn test_implicit_ten_thousand() {
    // "1 만"의 1은 생략
    assert_eq!(convert("1 만 원").unwrap().trim(), "만 원");
}

#[test]
fn test_one_plus_one() {
    assert_eq!(convert("1+1 행사").unwrap(), "원 플러스 원 행사");
}

#[test]
fn test_version_number() {
    assert_eq!(convert("버전 1.2.3 출시").unwrap(), "버전 일쩜이쩜삼 출시");
}

#[test]
fn test_reference_code_guard() {
    // 오른쪽에 "번"이 오면 식별자가 아니라 수량으로
    assert_eq!(convert("번호 345 번").unwrap(), "번호 삼백사십오 번");
    assert_eq!(convert("번호 1234").unwrap(), "번호 일이삼사");
}

#[test]
fn test_ordinal_chapter() {
    // "제 N 장"은 한자어
    assert_eq!(convert("제 3 장").unwrap(), "제 삼 장");
    assert_eq!(convert("3 장").unwrap(), "세 장");
}

#[test]
fn test_sign_spelled_out() {
    assert_eq!(convert("온도 - 5 도").unwrap(), "온도 마이너스 오 도");
}

#[test]
fn test_mixed_sentence() {
    // 단위·범위·기기명이 섞인 문장
    assert_eq!(
        convert("공인 연비는 13.6 km/l, 17.2 m/l이며, 1~2개, 내 휴대폰은 갤8").unwrap(),
        "공인 연비는 십삼쩜육 km/l, 십칠쩜이 m/l이며, 한~두개, 내 휴대폰은 갤에잇"
    );
}

#[test]
fn test_no_digit_passthrough() {
    assert_eq!(convert("숫자 없는 문장").unwrap(), "숫자 없는 문장");
    assert_eq!(convert("").unwrap(), "");
}

#[test]
fn test_idempotent_on_converted_output() {
    let once = convert("5 시").unwrap();
    assert_eq!(convert(&once).unwrap(), once);
}

#[test]
fn test_pass_limit_error() {
    let err = convert_with_limit("1 2 3", 0).unwrap_err();
    assert!(matches!(err, ConvertError::NoProgress { .. }));
}

#[test]
fn test_lossy_keeps_input_on_failure() {
    // 정상 입력은 동일, 실패해도 패닉 없이 원문 유지
    assert_eq!(convert_lossy("5 시"), "다섯 시");
    assert_eq!(convert_lossy("그대로"), "그대로");
}
