use crate::bug;
use std::fmt;

/// Versions of `.unwrap()` and `.expect()` that print a grammarkit-specific
/// error message, and format errors with Display instead of Debug.
pub trait GrammarBug<T>: Sized {
    /// Like `.unwrap()`, but with a better error message.
    fn bug(self) -> T;
    /// Like `.expect()`, but with a better error message.
    fn bug_msg(self, msg: &str) -> T;
}

impl<T> GrammarBug<T> for Option<T> {
    fn bug(self) -> T {
        match self {
            Some(val) => val,
            None => bug!("Tried to unwrap a `None` value"),
        }
    }

    fn bug_msg(self, msg: &str) -> T {
        match self {
            Some(val) => val,
            None => bug!("{}", msg),
        }
    }
}

impl<T, E: fmt::Display> GrammarBug<T> for Result<T, E> {
    fn bug(self) -> T {
        match self {
            Ok(ok) => ok,
            Err(err) => bug!("{}", err),
        }
    }

    fn bug_msg(self, msg: &str) -> T {
        match self {
            Ok(ok) => ok,
            Err(err) => bug!("{}\n{}", msg, err),
        }
    }
}

#[track_caller]
pub(crate) fn format_bug(location: String, message: String) -> String {
    let mut output = "\n*** Bug in grammarkit.".to_owned();
    output.push_str("\n*** Location:");
    output.push_str("\n***   ");
    output.push_str(&location);
    output.push_str("\n*** Error message:");
    for line in message.lines() {
        output.push_str("\n***   ");
        output.push_str(line);
    }
    output.push('\n');
    output
}

#[doc(hidden)]
#[macro_export]
/// Like `panic!()`, but with a better error message.
macro_rules! bug {
    ($message:literal) => {
        $crate::bug!($message,)
    };
    ($message:literal, $( $arg:expr ),*) => {
        panic!("{}",
            $crate::util::format_bug(
                format!("{}:{}:{}", file!(), line!(), column!()),
                format!($message, $( $arg ),*)
            )
        )
    };
}
