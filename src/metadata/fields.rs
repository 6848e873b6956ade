//! Permitted subsection/field names per recipe section.
//!
//! The base schema mirrors the packaging tool's field tables. `extra` is a
//! free-form section there; this crate extends it with the one field the
//! forge workflow requires, `recipe-maintainers`.

/// Fields the forge workflow adds on top of the base schema, all under
/// `extra`.
const EXTRA_LOCAL_FIELDS: &[&str] = &["recipe-maintainers"];

fn base_fields(section: &str) -> &'static [&'static str] {
    match section {
        "package" => &["name", "version"],
        "source" => &[
            "fn",
            "url",
            "md5",
            "sha1",
            "sha256",
            "path",
            "git_url",
            "git_tag",
            "git_branch",
            "git_rev",
            "git_depth",
            "hg_url",
            "hg_tag",
            "svn_url",
            "svn_rev",
            "svn_ignore_externals",
            "folder",
            "patches",
        ],
        "build" => &[
            "number",
            "string",
            "entry_points",
            "osx_is_app",
            "features",
            "track_features",
            "preserve_egg_dir",
            "no_link",
            "binary_relocation",
            "script",
            "noarch",
            "noarch_python",
            "has_prefix_files",
            "binary_has_prefix_files",
            "ignore_prefix_files",
            "detect_binary_files_with_prefix",
            "skip_compile_pyc",
            "rpaths",
            "script_env",
            "always_include_files",
            "skip",
            "msvc_compiler",
            "pin_depends",
            "include_recipe",
            "preferred_env",
            "preferred_env_executable_paths",
            "run_exports",
            "ignore_run_exports",
        ],
        "requirements" => &["build", "host", "run", "conflicts"],
        "app" => &["entry", "icon", "summary", "type", "cli_opts", "own_environment"],
        "outputs" => &[
            "name",
            "version",
            "number",
            "entry_points",
            "script",
            "script_interpreter",
            "build",
            "requirements",
            "test",
            "about",
            "extra",
            "files",
            "type",
            "run_exports",
        ],
        "test" => &["requires", "commands", "files", "imports", "source_files"],
        "about" => &[
            "home",
            "dev_url",
            "doc_url",
            "doc_source_url",
            "license_url",
            "license",
            "summary",
            "description",
            "license_family",
            "identifiers",
            "tags",
            "keywords",
            "license_file",
            "readme",
        ],
        _ => &[],
    }
}

/// Permitted field names for a section, including the local `extra`
/// extension. Empty for sections without a known schema.
pub fn permitted_fields(section: &str) -> Vec<&'static str> {
    let mut fields: Vec<&'static str> = base_fields(section).to_vec();
    if section == "extra" {
        fields.extend_from_slice(EXTRA_LOCAL_FIELDS);
    }
    fields
}
