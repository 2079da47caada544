//! Shared argument classification, applied after dialect-specific
//! tokenizing.
//!
//! A token starting with `/` or `-` is a flag; an inline value after `:` or
//! `=` stays part of the flag and is never a file candidate. Bare tokens are
//! source files. A handful of flag families carry file lists of their own.

use std::path::{Path, PathBuf};

use buildtrace_types::normalize_path;

#[derive(Debug, Default)]
pub(crate) struct ClassifiedArgs {
    pub sources: Vec<String>,
    pub additional: Vec<String>,
    pub embedded: Vec<String>,
}

pub(crate) fn classify(arguments: &[String]) -> ClassifiedArgs {
    let mut classified = ClassifiedArgs::default();

    for argument in arguments {
        if let Some(flag) = strip_flag_prefix(argument) {
            let (name, value) = match flag.split_once([':', '=']) {
                Some((name, value)) => (name, Some(value)),
                None => (flag, None),
            };
            match name.to_ascii_lowercase().as_str() {
                "additionalfile" | "additionalfiles" => {
                    classified.additional.extend(split_path_list(value));
                }
                // Bare /embed embeds the sources themselves, no extra files.
                "embed" => classified.embedded.extend(split_path_list(value)),
                _ => {}
            }
        } else if argument.starts_with('@') {
            // Response file reference, not an input file.
        } else {
            classified.sources.push(argument.clone());
        }
    }

    classified
}

/// Resolve a classified token list against the base directory.
pub(crate) fn resolve_all(base_dir: Option<&Path>, tokens: &[String]) -> Vec<PathBuf> {
    tokens
        .iter()
        .map(|token| normalize_path(base_dir, token))
        .collect()
}

/// Strip the leading compiler executable from a csc/vbc token list.
///
/// The logged command usually starts with the compiler binary, possibly
/// behind a `dotnet [exec]` prefix. Command text without a recognizable
/// executable is still decoded - the handlers only feed task-tagged command
/// lines in - so every token is then an argument.
pub(crate) fn strip_executable<'a>(
    tokens: &'a [String],
    executables: &[&str],
) -> (Option<String>, &'a [String]) {
    for (index, token) in tokens.iter().enumerate() {
        let name = file_name_lower(token);
        if executables.contains(&name.as_str()) {
            return (Some(token.clone()), &tokens[index + 1..]);
        }
        if matches!(name.as_str(), "dotnet" | "dotnet.exe" | "exec") {
            continue;
        }
        break;
    }
    (None, tokens)
}

/// `/flag`, `-flag` and `--flag` all denote the same flag.
fn strip_flag_prefix(argument: &str) -> Option<&str> {
    let flag = argument.strip_prefix(['/', '-'])?;
    Some(flag.strip_prefix('-').unwrap_or(flag))
}

fn file_name_lower(token: &str) -> String {
    let cleaned = token.replace('\\', "/");
    cleaned
        .rsplit('/')
        .next()
        .unwrap_or(&cleaned)
        .to_ascii_lowercase()
}

fn split_path_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|value| {
            value
                .split([',', ';'])
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
