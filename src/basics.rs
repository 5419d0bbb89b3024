//! Warm-up drills: fundamental types, scoping, and word filtering.

use lazy_static::lazy_static;
use regex::Regex;

use crate::output::format_real;

lazy_static! {
    static ref NO_WORD: Regex = Regex::new(r"(?i)^(no|on)$").expect("static pattern compiles");
}

/// One line per value of the fundamental types, then a mixed-arithmetic
/// average and the `i32` overflow case.
#[allow(clippy::approx_constant)]
pub fn datatype_lines() -> Vec<String> {
    let age: i32 = 10;
    let pi: f32 = 3.14;
    let frac: f64 = 2.5;
    let letter = 'A';
    let phrase = "hello";
    let is_married = true;

    let a: i32 = 10;
    let b: i32 = 5;
    let result = f64::from(a + b) / 2.0;

    vec![
        age.to_string(),
        format_real(f64::from(pi)),
        format_real(frac),
        letter.to_string(),
        phrase.to_string(),
        u8::from(is_married).to_string(),
        "----------".to_string(),
        format_real(result),
        "----------".to_string(),
        "int overflow: ".to_string(),
        format!("2147483647 + 1 = {}", i32::MAX.wrapping_add(1)),
        "----------------".to_string(),
    ]
}

/// Assignment, reassignment and the three initialisation forms.
pub fn variable_lines() -> Vec<String> {
    let mut age = 25;
    let first = age.to_string();
    age = 40;

    let age1 = 10;
    let age2 = 20;
    let age3 = 30;

    vec![
        first,
        age.to_string(),
        "-----------------".to_string(),
        format!("{age1} {age2} {age3}"),
        "-----------------".to_string(),
    ]
}

/// The constants block printed at the end of the reading drill.
#[allow(clippy::approx_constant)]
pub fn constant_lines() -> Vec<String> {
    const AGE: i32 = 10;
    const PI: f64 = 3.14159;
    const LETTER: char = 'A';
    const PHRASE: &str = "Hello";

    vec![
        "printing constants ".to_string(),
        AGE.to_string(),
        format_real(PI),
        LETTER.to_string(),
        PHRASE.to_string(),
    ]
}

/// A block-scoped binding is visible inside its branch only; `x` itself
/// outlives the `if`.
///
/// The branches test `x % 2 == 1` and `x % 2 == 0`. A negative odd `x` has
/// remainder `-1`, so it takes neither branch and only the last line prints.
pub fn parity_report(x: i64) -> Vec<String> {
    let mut lines = Vec::new();
    if x % 2 == 1 {
        lines.push(format!("{x} is odd"));
        let a = 22;
        lines.push(format!("{a} inner variable"));
    } else if x % 2 == 0 {
        lines.push(format!("{x} is even"));
    }
    lines.push(format!("{x} x variable outside scope of if"));
    lines
}

/// Two-letter words made of one `n` and one `o`, any case, any order.
pub fn no_words(words: &[String]) -> Vec<&str> {
    words
        .iter()
        .map(String::as_str)
        .filter(|word| NO_WORD.is_match(word))
        .collect()
}
