#[allow(unused)]
pub fn generic_parse<F, I, T>(parser: F, input: I, expect: T)
where
    F: Fn(I) -> T,
    T: PartialEq + std::fmt::Debug,
    I: std::fmt::Debug + Clone,
{
    let result = parser(input.clone());
    assert_eq!(
        expect, result,
        "The input:\r\n({:?})\r\nThe expect:\r\n({:?}) should be same with the result:\r\n({:?})",
        input, expect, result
    );
}

/// Owned tokens from string literals, for comparing tokenizer output.
#[allow(unused)]
pub fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
