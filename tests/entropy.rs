use glyphgrid::{windowed_entropy, Alphabet, Symbol, SymbolStream};

fn glyphs() -> Vec<Symbol> {
    let alphabet = Alphabet::mnality();
    alphabet.symbols().collect()
}

#[test]
fn empty_window_is_zero_not_nan() {
    for window in 1..10 {
        let h = windowed_entropy(&[], window);
        assert_eq!(h, 0.0);
        assert!(!h.is_nan());
    }
}

#[test]
fn single_symbol_has_zero_entropy_for_any_length() {
    let s = glyphs()[0];
    for k in 1..32 {
        let sequence = vec![s; k];
        assert_eq!(windowed_entropy(&sequence, 64), 0.0);
    }
}

#[test]
fn equidistribution_reaches_log2_n() {
    let symbols = glyphs();
    // Each of the 5 glyphs appears exactly 4 times in the window.
    let mut sequence = Vec::new();
    for _ in 0..4 {
        sequence.extend_from_slice(&symbols);
    }
    let h = windowed_entropy(&sequence, sequence.len());
    assert!((h - (symbols.len() as f64).log2()).abs() < 1e-9);
}

#[test]
fn two_even_symbols_give_exactly_one_bit() {
    let symbols = glyphs();
    let mut sequence = vec![symbols[0]; 10];
    sequence.extend(vec![symbols[1]; 10]);
    let h = windowed_entropy(&sequence, 20);
    assert!((h - 1.0).abs() < 1e-9);
}

#[test]
fn window_truncates_to_the_most_recent_elements() {
    let symbols = glyphs();
    let mut sequence = vec![symbols[0]; 10];
    sequence.extend(vec![symbols[1]; 10]);
    // The trailing 10 elements are all the same symbol.
    assert_eq!(windowed_entropy(&sequence, 10), 0.0);
}

#[test]
fn window_larger_than_sequence_uses_everything() {
    let symbols = glyphs();
    let sequence = vec![symbols[0], symbols[1]];
    assert!((windowed_entropy(&sequence, 1000) - 1.0).abs() < 1e-9);
}

#[test]
fn entropy_is_never_negative() {
    let symbols = glyphs();
    let sequence: Vec<Symbol> = (0..100).map(|i| symbols[i % symbols.len()]).collect();
    for window in 1..50 {
        assert!(windowed_entropy(&sequence, window) >= 0.0);
    }
}

#[test]
fn stream_entropy_matches_free_function() {
    let symbols = glyphs();
    let mut stream = SymbolStream::new(50);
    let mut log = Vec::new();
    for i in 0..30 {
        let s = symbols[i % 3];
        stream.push(s);
        log.push(s);
    }
    assert_eq!(stream.entropy(10), windowed_entropy(&log, 10));
}
