//! Search-list extraction from compiler diagnostics.
//!
//! GCC-compatible drivers bracket their default header search paths with a
//! pair of sentinel lines. Everything between them, one path per line, is
//! the list this module extracts — in the order the compiler reported it,
//! which is the order the compiler searches.

use tracing::debug;

use crate::error::{ResolveError, Result};

/// Sentinel opening the angle-bracket search list.
pub const SEARCH_LIST_START: &str = "#include <...> search starts here:";

/// Sentinel closing the search list.
pub const SEARCH_LIST_END: &str = "End of search list.";

/// Extract the raw search-path lines bounded by the two sentinels.
///
/// Lines are trimmed and blank lines dropped; order is preserved. Fails
/// with [`ResolveError::DelimiterNotFound`] if either sentinel is absent,
/// since downstream configuration assumes the block exists.
pub fn extract(output: &str) -> Result<Vec<String>> {
    let missing = || ResolveError::DelimiterNotFound {
        output: output.to_string(),
    };

    let start = output.find(SEARCH_LIST_START).ok_or_else(missing)?;
    let block = &output[start + SEARCH_LIST_START.len()..];
    let end = block.find(SEARCH_LIST_END).ok_or_else(missing)?;

    let paths: Vec<String> = block[..end]
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    debug!(count = paths.len(), "extracted compiler search list");
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GCC_OUTPUT: &str = concat!(
        "ignoring nonexistent directory \"/usr/local/include/x86_64-linux-gnu\"\n",
        "#include \"...\" search starts here:\n",
        "#include <...> search starts here:\n",
        " /usr/lib/gcc/x86_64-linux-gnu/12/include\n",
        " /usr/local/include\n",
        " /usr/include\n",
        "End of search list.\n",
        "# 1 \"/dev/null\"\n",
    );

    #[test]
    fn test_extract_returns_in_block_lines_in_order() {
        let paths = extract(GCC_OUTPUT).unwrap();
        assert_eq!(
            paths,
            vec![
                "/usr/lib/gcc/x86_64-linux-gnu/12/include",
                "/usr/local/include",
                "/usr/include",
            ]
        );
    }

    #[test]
    fn test_extract_drops_blank_lines() {
        let output = format!("{SEARCH_LIST_START}\n /a\n\n   \n /b\n{SEARCH_LIST_END}");
        let paths = extract(&output).unwrap();
        assert_eq!(paths, vec!["/a", "/b"]);
    }

    #[test]
    fn test_extract_empty_block_is_empty_list() {
        let output = format!("{SEARCH_LIST_START}\n{SEARCH_LIST_END}");
        let paths = extract(&output).unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_extract_missing_end_sentinel_fails() {
        let output = format!("{SEARCH_LIST_START}\n /usr/include\n");
        let err = extract(&output).unwrap_err();
        match err {
            ResolveError::DelimiterNotFound { output: raw } => {
                assert!(raw.contains("/usr/include"), "raw output kept for diagnosis");
            }
            other => panic!("expected DelimiterNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_missing_start_sentinel_fails() {
        let output = format!(" /usr/include\n{SEARCH_LIST_END}\n");
        assert!(matches!(
            extract(&output),
            Err(ResolveError::DelimiterNotFound { .. })
        ));
    }
}
