use chrono::Utc;

pub const PRIME_QUOTES: [&str; 4] = [
    "Prime numbers are the most basic objects in mathematics.",
    "Prime numbers are like the atoms of arithmetic.",
    "The distribution of primes is a profound mystery.",
    "Every even number greater than 2 is the sum of two primes.",
];

pub const NOT_PRIME_LINE: &str = "You shall not pass!";

/// Picks a quote to show next to a prime result.
///
/// Only the presentation layer owns one of these; with a fixed seed the
/// sequence of picks is reproducible.
#[derive(Debug, Clone)]
pub struct QuotePicker {
    quotes: Vec<String>,
    state: u64,
}

impl QuotePicker {
    pub fn new(quotes: Vec<String>, seed: u64) -> Self {
        let quotes = if quotes.is_empty() {
            PRIME_QUOTES.iter().map(|q| q.to_string()).collect()
        } else {
            quotes
        };

        // xorshift 的狀態不能為 0
        let state = match seed ^ 0x9E37_79B9_7F4A_7C15 {
            0 => 0x2545_F491_4F6C_DD1D,
            s => s,
        };

        Self { quotes, state }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(Vec::new(), seed)
    }

    pub fn from_clock(quotes: Vec<String>) -> Self {
        let seed = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
        Self::new(quotes, seed)
    }

    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }

    fn next_index(&mut self) -> usize {
        // xorshift64*
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        (x.wrapping_mul(0x2545_F491_4F6C_DD1D) % self.quotes.len() as u64) as usize
    }

    pub fn pick(&mut self) -> &str {
        let index = self.next_index();
        &self.quotes[index]
    }

    /// 質數顯示隨機名言，否則固定顯示 "You shall not pass!"
    pub fn line_for(&mut self, is_prime: bool) -> String {
        if is_prime {
            self.pick().to_string()
        } else {
            NOT_PRIME_LINE.to_string()
        }
    }
}
