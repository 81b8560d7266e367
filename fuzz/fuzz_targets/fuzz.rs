#![no_main]
use censory::{Boundaries, Censor, Denylist};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if !data.is_empty() {
        let flags = data[0];
        let input = &data[1..];

        if let Ok(text) = std::str::from_utf8(input) {
            // First line is the word list, the rest is the phrase.
            let (words, phrase) = text.split_once('\n').unwrap_or((text, text));
            let denylist = Denylist::load(words.as_bytes())
                .unwrap()
                .with_mask_char(if flag(flags, 0) { '#' } else { '*' });

            let mut censor = Censor::new(&denylist);
            let clean = censor.is_clean(phrase);

            let censored = censor.censor(phrase);
            assert_eq!(censored.chars().count(), phrase.chars().count());
            if clean {
                assert_eq!(censored, phrase);
            }

            censor.with_boundaries(Boundaries::Token);
            let censored = censor.censor(phrase);
            assert_eq!(censored.chars().count(), phrase.chars().count());
            assert_eq!(censor.censor(&censored), censored);
            if clean {
                assert_eq!(censored, phrase);
            }
        }
    }
});

fn flag(flags: u8, index: u8) -> bool {
    ((flags >> index) & 1) == 1
}
