use winnow::{
    ModalResult, Parser,
    combinator::{alt, opt, preceded, repeat},
    token::{any, none_of, take_till, take_while},
};

/// One shell word with its quoting resolved.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Word {
    pub text: String,
    /// The quote character that opened the word, if it was quoted
    pub quote: Option<char>,
    /// False when a quoted word ran to the end of input
    pub closed: bool,
}

impl Word {
    fn bare(text: &str) -> Self {
        Word {
            text: text.into(),
            quote: None,
            closed: true,
        }
    }

    pub fn is_unterminated(&self) -> bool {
        !self.closed
    }
}

/// Collapse curl line continuations (and plain line breaks) into single spaces.
pub fn join_continuations(raw: &str) -> String {
    raw.replace("\\\r\n", " ")
        .replace("\\\n", " ")
        .replace("\r\n", " ")
        .replace('\n', " ")
}

fn parse_double_quoted_word(s: &mut &str) -> ModalResult<Word> {
    // Inside double quotes a backslash makes the next character literal.
    preceded(
        '"',
        (
            repeat(0.., alt((preceded('\\', any), none_of('"')))),
            opt('"'),
        ),
    )
    .map(|(text, close): (String, Option<char>)| Word {
        text,
        quote: Some('"'),
        closed: close.is_some(),
    })
    .parse_next(s)
}

fn parse_single_quoted_word(s: &mut &str) -> ModalResult<Word> {
    preceded('\'', (take_till(0.., '\''), opt('\'')))
        .map(|(text, close)| Word {
            text: String::from(text),
            quote: Some('\''),
            closed: close.is_some(),
        })
        .parse_next(s)
}

fn parse_bare_word(s: &mut &str) -> ModalResult<Word> {
    take_till(1.., char::is_whitespace)
        .map(Word::bare)
        .parse_next(s)
}

fn parse_word(s: &mut &str) -> ModalResult<Word> {
    preceded(
        take_while(0.., char::is_whitespace),
        alt((
            parse_double_quoted_word,
            parse_single_quoted_word,
            parse_bare_word,
        )),
    )
    .parse_next(s)
}

fn parse_words(s: &mut &str) -> ModalResult<Vec<Word>> {
    repeat(0.., parse_word).parse_next(s)
}

/// Split a command line into words, keeping how each one was quoted.
pub fn lex(raw: &str) -> Vec<Word> {
    let joined = join_continuations(raw);
    let mut input = joined.trim();
    // Every non-empty remainder starts a word, so this cannot fail.
    let words = parse_words(&mut input).unwrap_or_default();
    tracing::trace!(count = words.len(), "lexed command line");
    words
}

/// Split a command line into plain string tokens.
pub fn tokenize(raw: &str) -> Vec<String> {
    lex(raw).into_iter().map(|w| w.text).collect()
}
