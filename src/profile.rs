use serde_json::{Map, Value, json};

/// Fields that only matter at build time and never belong in a staged
/// manifest. Both publish targets strip the same set.
const STRIPPED_FIELDS: [&str; 5] = [
    "scripts",
    "devDependencies",
    "packageManager",
    "engines",
    "files",
];

/// A named rule table describing how a manifest is rewritten for one
/// publish target.
#[derive(Debug, Clone)]
pub struct PublishProfile {
    /// Command name the `bin` entry maps to the version-info executable.
    pub bin_command: &'static str,
    /// Relative path the `bin` entry points at.
    pub bin_path: &'static str,
    /// Replacement package name, for targets that require a scoped identifier.
    pub name_override: Option<&'static str>,
    /// Registry URL written into `publishConfig`, for targets that need one.
    pub publish_registry: Option<&'static str>,
    /// Default directory the staged manifest is written into.
    pub out_dir: &'static str,
    /// Confirmation line printed after a successful write.
    pub status_message: &'static str,
}

impl PublishProfile {
    /// Profile for the GitHub-hosted npm package registry. The staged
    /// manifest lands in `dist/` with a scoped name and a `publishConfig`
    /// pointing at the registry.
    pub fn github() -> Self {
        Self {
            bin_command: "version-info",
            bin_path: "bin/version_info",
            name_override: Some("@celtian/ngx-fixed-footer"),
            publish_registry: Some("https://npm.pkg.github.com"),
            out_dir: "dist",
            status_message: "Package.json in dist/ modified with publishConfig and name.",
        }
    }

    /// Profile for the Zig package source layout. Name and publish
    /// configuration are left as the input has them.
    pub fn zig() -> Self {
        Self {
            bin_command: "package-version-info",
            bin_path: "bin/version_info",
            name_override: None,
            publish_registry: None,
            out_dir: "src",
            status_message: "Package.json in src/ modified.",
        }
    }

    /// Apply the profile's rules to a loaded manifest, returning the staged
    /// record. The input is left untouched; stripping an absent field is a
    /// no-op. Keys already present keep their position, new keys append.
    pub fn apply(&self, manifest: &Map<String, Value>) -> Map<String, Value> {
        let mut staged = manifest.clone();

        for field in STRIPPED_FIELDS {
            staged.remove(field);
        }

        let mut bin = Map::new();
        bin.insert(
            self.bin_command.to_string(),
            Value::String(self.bin_path.to_string()),
        );
        staged.insert("bin".to_string(), Value::Object(bin));

        if let Some(name) = self.name_override {
            staged.insert("name".to_string(), Value::String(name.to_string()));
        }

        if let Some(registry) = self.publish_registry {
            staged.insert("publishConfig".to_string(), json!({ "registry": registry }));
        }

        staged
    }
}
