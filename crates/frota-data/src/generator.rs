//! Stateless value generators for individual synthetic fields.
//!
//! Each generator consumes randomness from a caller-supplied [`rand::Rng`]
//! and produces one field. Taking the RNG as a parameter keeps the functions
//! deterministic under a seeded generator, so tests can pin exact outputs.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;
use rand::distr::Alphanumeric;

use crate::pools::{BRAZIL_BOUNDS, EMAIL_DOMAIN, GIVEN_NAMES, OPERATOR_PREFIX, SURNAMES};

/// Length of generated random passwords.
pub const PASSWORD_LEN: usize = 12;

/// Number of days in the generated-birth-date range, 1970-01-01 through
/// 2000-12-31, both endpoints selectable.
const BIRTH_RANGE_DAYS: u64 = 11_322;

/// Maximum age, in days, of a generated recent timestamp.
const RECENT_WINDOW_DAYS: u64 = 30;

/// Draws a coordinate pair uniformly within the Brazilian bounding box,
/// rounded to six decimal places.
pub fn coordinates<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
    let lat = round6(rng.random_range(BRAZIL_BOUNDS.lat_min..=BRAZIL_BOUNDS.lat_max));
    let lon = round6(rng.random_range(BRAZIL_BOUNDS.lon_min..=BRAZIL_BOUNDS.lon_max));
    (lat, lon)
}

/// Generates an 11-digit CPF-style identifier: 9 random digits plus two
/// check digits.
///
/// Each check pass weights digit `i` by `len + 1 - i` (where `len` is the
/// current digit count), sums, and reduces mod 11; the check digit is
/// `11 - v` when `v > 1`, otherwise `0`. The weighting is kept exactly as
/// the datasets downstream expect it, quirks included; it is a
/// plausible-looking synthetic value, not a certified document number.
pub fn cpf<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut digits: Vec<u32> = (0..9).map(|_| rng.random_range(0..=9)).collect();
    for _ in 0..2 {
        digits.push(check_digit(&digits));
    }
    digits.iter().map(ToString::to_string).collect()
}

/// Computes one CPF check digit over the digits accumulated so far.
fn check_digit(digits: &[u32]) -> u32 {
    let top = digits.len() as u32 + 1;
    let val = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| (top - i as u32) * d)
        .sum::<u32>()
        % 11;
    if val > 1 { 11 - val } else { 0 }
}

/// Draws a name/surname pair from the fixed pools and derives an e-mail
/// address from them.
///
/// The draw is independent of any name a record may already carry: when a
/// partially-filled row keeps its own name but receives a generated e-mail,
/// the address will name somebody else. That decorrelation is deliberate
/// behaviour of the datasets this mimics and is preserved as-is.
pub fn identity<R: Rng + ?Sized>(rng: &mut R) -> (String, String, String) {
    let nome = pick(rng, GIVEN_NAMES);
    let sobrenome = pick(rng, SURNAMES);
    let email = format!(
        "{}.{}@{EMAIL_DOMAIN}",
        nome.to_lowercase(),
        sobrenome.to_lowercase()
    );
    (nome.to_owned(), sobrenome.to_owned(), email)
}

/// Generates an 11-digit security number.
pub fn security_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    digit_string(rng, 11)
}

/// Generates a license document code: two uppercase letters followed by
/// nine digits.
pub fn renach<R: Rng + ?Sized>(rng: &mut R) -> String {
    let letters: String = (0..2)
        .map(|_| char::from(b'A' + rng.random_range(0..26u8)))
        .collect();
    format!("{letters}{}", digit_string(rng, 9))
}

/// Generates an operator code: the fixed prefix plus five random digits.
pub fn operator_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{OPERATOR_PREFIX}{}", rng.random_range(10_000..=99_999))
}

/// Generates a formatted phone number, `(AA) NNNNNNNNN`.
pub fn phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    let ddd: u32 = rng.random_range(11..=99);
    let numero: u32 = rng.random_range(900_000_000..=999_999_999);
    format!("({ddd}) {numero}")
}

/// Generates a birth date uniformly between 1970-01-01 and 2000-12-31
/// inclusive, formatted `dd/mm/yyyy`.
pub fn birth_date<R: Rng + ?Sized>(rng: &mut R) -> String {
    // NaiveDate::default() is the Unix epoch, the start of the range.
    let date = NaiveDate::default() + Days::new(rng.random_range(0..=BIRTH_RANGE_DAYS));
    date.format("%d/%m/%Y").to_string()
}

/// Generates a timestamp within the last 30 days of `now`.
///
/// The day is `now` minus up to 30 days; hour, minute, and second are each
/// redrawn from their full ranges, so the result carries no correlation
/// with the time-of-day of `now`.
pub fn recent_timestamp<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime) -> NaiveDateTime {
    let date = (now - Days::new(rng.random_range(0..=RECENT_WINDOW_DAYS))).date();
    let time = NaiveTime::from_hms_opt(
        rng.random_range(0..24),
        rng.random_range(0..60),
        rng.random_range(0..60),
    )
    .unwrap_or(NaiveTime::MIN);
    NaiveDateTime::new(date, time)
}

/// Generates a 12-character alphanumeric password.
pub fn password<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..PASSWORD_LEN)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

/// Picks one element of a fixed pool.
///
/// Pools are non-empty compile-time constants; the fallback arm is
/// unreachable for them.
pub(crate) fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &'static [&'static str]) -> &'static str {
    pool.get(rng.random_range(0..pool.len()))
        .copied()
        .unwrap_or_default()
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

fn digit_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}
