//! The namespace-convention rule.
//!
//! A source file is expected to declare the namespace formed by the root
//! namespace of its nearest enclosing module manifest plus the dotted
//! relative path from the manifest's directory to the file's directory.
//! [`check_namespace`] runs the rule for one namespace declaration and
//! reports at most one diagnostic; every way the convention can fail to
//! apply (no manifest, no root namespace, file outside the manifest
//! tree) is silence, not an error.

pub mod cache;
pub mod locate;
pub mod resolve;

use std::path::Path;

use crate::diagnostic::{Diagnostic, Severity, Span};
use crate::ports::filesystem::FileSystem;

pub use cache::ManifestCache;
pub use locate::locate_manifest;
pub use resolve::{expected_namespace, extract_root_namespace};

/// Static description of a rule: code, title, severity.
#[derive(Debug, Clone, Copy)]
pub struct RuleDescriptor {
    /// Stable rule code.
    pub code: &'static str,
    /// Short human-readable title.
    pub title: &'static str,
    /// Severity of diagnostics the rule emits.
    pub severity: Severity,
}

/// The incorrect-namespace rule.
pub const INCORRECT_NAMESPACE: RuleDescriptor = RuleDescriptor {
    code: "NS01",
    title: "Incorrect namespace",
    severity: Severity::Warning,
};

/// Everything the rule needs to know about one namespace declaration.
///
/// Mirrors what an embedding analysis framework supplies per
/// declaration; the CLI driver fills it in from its own file scan.
pub struct RuleContext<'a> {
    /// Filesystem used for manifest lookup and reading.
    pub fs: &'a dyn FileSystem,
    /// Identity of the compilation the file belongs to. `None` means the
    /// rule cannot apply (no compilation context).
    pub assembly: Option<&'a str>,
    /// Absolute path of the file containing the declaration. `None` or
    /// empty means the file has no on-disk origin and is skipped.
    pub file_path: Option<&'a Path>,
    /// The namespace name as written in the declaration.
    pub declared: &'a str,
    /// Span of the declared name.
    pub span: Span,
    /// Optional per-run cache of manifest locations.
    pub cache: Option<&'a ManifestCache>,
}

/// Checks one namespace declaration against the convention.
///
/// Returns a diagnostic iff the declaration's file resolves to an
/// expected namespace and the declared name differs from it exactly;
/// every other outcome is `None`.
#[must_use]
pub fn check_namespace(ctx: &RuleContext<'_>) -> Option<Diagnostic> {
    ctx.assembly?;

    let file_path = ctx.file_path.filter(|p| !p.as_os_str().is_empty())?;
    let file_dir = file_path.parent()?;

    let manifest_path = match ctx.cache {
        Some(cache) => cache.locate(ctx.fs, file_dir),
        None => locate_manifest(ctx.fs, file_dir),
    }?;

    let root_namespace = extract_root_namespace(ctx.fs, &manifest_path)?;
    let manifest_dir = manifest_path.parent()?;
    let expected = expected_namespace(&root_namespace, manifest_dir, file_dir)?;

    if ctx.declared == expected {
        return None;
    }

    Some(Diagnostic {
        code: INCORRECT_NAMESPACE.code.to_string(),
        severity: INCORRECT_NAMESPACE.severity,
        message: format!("Namespace should be '{expected}'"),
        file: file_path.to_path_buf(),
        span: ctx.span,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::ReplayingFileSystem;
    use crate::cassette::format::{Cassette, FsCall, FsReply, Interaction};
    use crate::cassette::replayer::FsReplayer;
    use chrono::Utc;

    const MANIFEST_TEXT: &str = "{\n    \"name\": \"Module\",\n    \"rootNamespace\": \"Acme.Module\",\n}\n";

    /// Replays the walk for a file in `/proj/Module/Runtime` whose
    /// manifest sits at `/proj/Module/mod.manifest`.
    fn module_tree_fs() -> ReplayingFileSystem {
        let interactions = vec![
            (
                FsCall::ListDir { path: "/proj/Module/Runtime".into() },
                FsReply::Entries(vec!["Foo.cs".into()]),
            ),
            (
                FsCall::ListDir { path: "/proj/Module/Runtime".into() },
                FsReply::Entries(vec!["Foo.cs".into()]),
            ),
            (
                FsCall::ListDir { path: "/proj/Module".into() },
                FsReply::Entries(vec!["Runtime".into(), "mod.manifest".into()]),
            ),
            (FsCall::IsDir { path: "/proj/Module/mod.manifest".into() }, FsReply::Flag(false)),
            (
                FsCall::ReadToString { path: "/proj/Module/mod.manifest".into() },
                FsReply::Text(MANIFEST_TEXT.into()),
            ),
        ];
        let interactions = interactions
            .into_iter()
            .enumerate()
            .map(|(i, (call, reply))| Interaction { seq: i as u64, call, reply })
            .collect();
        let cassette = Cassette {
            name: "rule-test".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions,
        };
        ReplayingFileSystem::new(FsReplayer::new(&cassette))
    }

    fn ctx<'a>(fs: &'a dyn FileSystem, declared: &'a str) -> RuleContext<'a> {
        RuleContext {
            fs,
            assembly: Some("Module"),
            file_path: Some(Path::new("/proj/Module/Runtime/Foo.cs")),
            declared,
            span: Span { line: 3, column: 11, length: declared.len() },
            cache: None,
        }
    }

    #[test]
    fn mismatched_declaration_produces_ns01_warning() {
        let fs = module_tree_fs();
        let diagnostic = check_namespace(&ctx(&fs, "Acme.Module.Wrong")).expect("diagnostic");

        assert_eq!(diagnostic.code, "NS01");
        assert_eq!(diagnostic.severity, Severity::Warning);
        assert_eq!(diagnostic.message, "Namespace should be 'Acme.Module.Runtime'");
        assert_eq!(diagnostic.file, Path::new("/proj/Module/Runtime/Foo.cs"));
        assert_eq!(diagnostic.span.line, 3);
    }

    #[test]
    fn matching_declaration_is_silent() {
        let fs = module_tree_fs();
        assert_eq!(check_namespace(&ctx(&fs, "Acme.Module.Runtime")), None);
    }

    #[test]
    fn missing_assembly_short_circuits_without_touching_fs() {
        // Empty cassette: any filesystem call would panic.
        let cassette = Cassette {
            name: "empty".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions: vec![],
        };
        let fs = ReplayingFileSystem::new(FsReplayer::new(&cassette));
        let mut context = ctx(&fs, "Anything");
        context.assembly = None;
        assert_eq!(check_namespace(&context), None);
    }

    #[test]
    fn missing_file_path_short_circuits_without_touching_fs() {
        let cassette = Cassette {
            name: "empty".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions: vec![],
        };
        let fs = ReplayingFileSystem::new(FsReplayer::new(&cassette));

        let mut context = ctx(&fs, "Anything");
        context.file_path = None;
        assert_eq!(check_namespace(&context), None);

        let mut context = ctx(&fs, "Anything");
        context.file_path = Some(Path::new(""));
        assert_eq!(check_namespace(&context), None);
    }

    #[test]
    fn shared_cache_skips_repeat_manifest_walks() {
        // One locate walk plus two manifest reads: the second declaration
        // reuses the cached manifest location, so a second walk would
        // exhaust the cassette and panic.
        let interactions = vec![
            (
                FsCall::ListDir { path: "/proj/Module".into() },
                FsReply::Entries(vec!["mod.manifest".into()]),
            ),
            (FsCall::IsDir { path: "/proj/Module/mod.manifest".into() }, FsReply::Flag(false)),
            (
                FsCall::ReadToString { path: "/proj/Module/mod.manifest".into() },
                FsReply::Text(MANIFEST_TEXT.into()),
            ),
            (
                FsCall::ReadToString { path: "/proj/Module/mod.manifest".into() },
                FsReply::Text(MANIFEST_TEXT.into()),
            ),
        ];
        let interactions = interactions
            .into_iter()
            .enumerate()
            .map(|(i, (call, reply))| Interaction { seq: i as u64, call, reply })
            .collect();
        let cassette = Cassette {
            name: "cache-rule-test".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions,
        };
        let fs = ReplayingFileSystem::new(FsReplayer::new(&cassette));

        let cache = ManifestCache::new();
        for declared in ["Acme.Module", "Acme.Module"] {
            let context = RuleContext {
                fs: &fs,
                assembly: Some("Module"),
                file_path: Some(Path::new("/proj/Module/Foo.cs")),
                declared,
                span: Span { line: 1, column: 11, length: declared.len() },
                cache: Some(&cache),
            };
            assert_eq!(check_namespace(&context), None);
        }
    }
}
