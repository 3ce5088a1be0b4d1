//! Template provider: holds the template roles and replacement values for
//! one project and renders every populated role to disk.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::project::Command;
use crate::structure::ProjectStructure;
use crate::templates;
use crate::verifier;
use crate::writer;

/// The placeholder names recognized during rendering. Any `<...>` token
/// outside this set passes through untouched.
pub const PLACEHOLDER_NAMES: [&str; 4] =
    ["project_name", "package_name", "wallet_name", "password_file_name"];

/// Immutable set of template roles and replacements for one variant,
/// produced by [`TemplateProviderBuilder::build`].
#[derive(Debug)]
pub struct TemplateProvider {
    starter_source: String,
    starter_file_name: String,
    build_script: String,
    build_settings: String,
    wrapper_settings: String,
    wrapper_script: String,
    wrapper_bat_script: String,
    wrapper_jar: String,
    sample_contract: Option<String>,
    solidity_import_path: Option<PathBuf>,
    replacements: BTreeMap<&'static str, String>,
}

impl TemplateProvider {
    /// Performs literal placeholder substitution on an embedded template.
    ///
    /// Substitution is strict: a recognized placeholder left in the output
    /// because no replacement was configured for it is a rendering error,
    /// reported with the token and the template id.
    fn render(
        &self,
        resource_id: &str,
        replacements: &BTreeMap<&'static str, String>,
    ) -> Result<String> {
        let mut rendered = templates::template_text(resource_id)?.to_string();
        for (name, value) in replacements {
            rendered = rendered.replace(&format!("<{}>", name), value);
        }
        for name in PLACEHOLDER_NAMES {
            let token = format!("<{}>", name);
            if rendered.contains(&token) {
                return Err(Error::Template(format!(
                    "template '{}' contains '{}' but no replacement is configured for it",
                    resource_id, token
                )));
            }
        }
        Ok(rendered)
    }

    /// Renders the starter source. The project-name placeholder takes the
    /// capitalized form here, matching the starter class naming rule.
    pub fn load_starter_source(&self) -> Result<String> {
        let mut replacements = self.replacements.clone();
        if let Some(name) = replacements.get_mut("project_name") {
            *name = verifier::capitalize_first_letter(name);
        }
        self.render(&self.starter_source, &replacements)
    }

    pub fn load_build_script(&self) -> Result<String> {
        self.render(&self.build_script, &self.replacements)
    }

    pub fn load_build_settings(&self) -> Result<String> {
        self.render(&self.build_settings, &self.replacements)
    }

    /// Renders every populated role and writes it to the path computed by
    /// the project structure. Unset optional roles are skipped.
    pub fn generate_files(&self, structure: &ProjectStructure) -> Result<()> {
        writer::write_resource_file(
            &self.load_starter_source()?,
            &self.starter_file_name,
            structure.main_path(),
        )?;
        writer::write_resource_file(
            &self.load_build_script()?,
            "build.gradle",
            structure.project_root(),
        )?;
        writer::write_resource_file(
            &self.load_build_settings()?,
            "settings.gradle",
            structure.project_root(),
        )?;

        if let Some(contract) = &self.sample_contract {
            writer::write_resource_file(
                &self.render(contract, &self.replacements)?,
                "HelloWorld.sol",
                structure.solidity_path(),
            )?;
        }
        if let Some(source) = &self.solidity_import_path {
            writer::import_solidity_project(source, structure.solidity_path())?;
        }

        writer::write_resource_file(
            &self.render(&self.wrapper_settings, &self.replacements)?,
            "gradle-wrapper.properties",
            structure.wrapper_path(),
        )?;
        writer::write_resource_file(
            &self.render(&self.wrapper_script, &self.replacements)?,
            "gradlew",
            structure.project_root(),
        )?;
        writer::write_resource_file(
            &self.render(&self.wrapper_bat_script, &self.replacements)?,
            "gradlew.bat",
            structure.project_root(),
        )?;
        writer::copy_resource_file(
            templates::template_bytes(&self.wrapper_jar)?,
            &structure.wrapper_path().join("gradle-wrapper.jar"),
        )?;
        Ok(())
    }
}

/// Accumulates template roles and replacement values, then validates the
/// combination for the chosen command before handing out a provider.
pub struct TemplateProviderBuilder {
    command: Command,
    starter_source: Option<String>,
    starter_file_name: Option<String>,
    build_script: Option<String>,
    build_settings: Option<String>,
    wrapper_settings: Option<String>,
    wrapper_script: Option<String>,
    wrapper_bat_script: Option<String>,
    wrapper_jar: Option<String>,
    sample_contract: Option<String>,
    solidity_import_path: Option<PathBuf>,
    replacements: BTreeMap<&'static str, String>,
}

impl TemplateProviderBuilder {
    pub fn new(command: Command) -> Self {
        TemplateProviderBuilder {
            command,
            starter_source: None,
            starter_file_name: None,
            build_script: None,
            build_settings: None,
            wrapper_settings: None,
            wrapper_script: None,
            wrapper_bat_script: None,
            wrapper_jar: None,
            sample_contract: None,
            solidity_import_path: None,
            replacements: BTreeMap::new(),
        }
    }

    pub fn with_starter_source(mut self, resource_id: &str, file_name: &str) -> Self {
        self.starter_source = Some(resource_id.to_string());
        self.starter_file_name = Some(file_name.to_string());
        self
    }

    pub fn with_build_script(mut self, resource_id: &str) -> Self {
        self.build_script = Some(resource_id.to_string());
        self
    }

    pub fn with_build_settings(mut self, resource_id: &str) -> Self {
        self.build_settings = Some(resource_id.to_string());
        self
    }

    pub fn with_wrapper_settings(mut self, resource_id: &str) -> Self {
        self.wrapper_settings = Some(resource_id.to_string());
        self
    }

    pub fn with_wrapper_script(mut self, resource_id: &str) -> Self {
        self.wrapper_script = Some(resource_id.to_string());
        self
    }

    pub fn with_wrapper_bat_script(mut self, resource_id: &str) -> Self {
        self.wrapper_bat_script = Some(resource_id.to_string());
        self
    }

    pub fn with_wrapper_jar(mut self, resource_id: &str) -> Self {
        self.wrapper_jar = Some(resource_id.to_string());
        self
    }

    pub fn with_sample_contract(mut self, resource_id: &str) -> Self {
        self.sample_contract = Some(resource_id.to_string());
        self
    }

    pub fn with_solidity_import_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.solidity_import_path = Some(path.into());
        self
    }

    pub fn with_project_name(mut self, project_name: &str) -> Self {
        self.replacements.insert("project_name", project_name.to_string());
        self
    }

    pub fn with_package_name(mut self, package_name: &str) -> Self {
        self.replacements.insert("package_name", package_name.to_string());
        self
    }

    pub fn with_wallet_name(mut self, wallet_name: &str) -> Self {
        self.replacements.insert("wallet_name", wallet_name.to_string());
        self
    }

    pub fn with_password_file_name(mut self, password_file_name: &str) -> Self {
        self.replacements.insert("password_file_name", password_file_name.to_string());
        self
    }

    /// Validates that every role required by the command is populated and
    /// returns the immutable provider. Fails fast naming the missing role.
    pub fn build(self) -> Result<TemplateProvider> {
        for name in ["project_name", "package_name"] {
            if !self.replacements.contains_key(name) {
                return Err(Error::Config(format!(
                    "replacement value '{}' is not set",
                    name
                )));
            }
        }

        match self.command {
            Command::New => {
                if self.sample_contract.is_none() {
                    return Err(missing_role("sample contract"));
                }
                if self.solidity_import_path.is_some() {
                    return Err(Error::Config(
                        "a solidity import path cannot be set for a new project".to_string(),
                    ));
                }
            }
            Command::Import => {
                if self.solidity_import_path.is_none() {
                    return Err(missing_role("solidity import path"));
                }
                if self.sample_contract.is_some() {
                    return Err(Error::Config(
                        "a sample contract cannot be set for an imported project".to_string(),
                    ));
                }
            }
        }

        Ok(TemplateProvider {
            starter_source: self.starter_source.ok_or_else(|| missing_role("starter source"))?,
            starter_file_name: self
                .starter_file_name
                .ok_or_else(|| missing_role("starter file name"))?,
            build_script: self.build_script.ok_or_else(|| missing_role("build script"))?,
            build_settings: self
                .build_settings
                .ok_or_else(|| missing_role("build settings"))?,
            wrapper_settings: self
                .wrapper_settings
                .ok_or_else(|| missing_role("wrapper settings"))?,
            wrapper_script: self
                .wrapper_script
                .ok_or_else(|| missing_role("wrapper script"))?,
            wrapper_bat_script: self
                .wrapper_bat_script
                .ok_or_else(|| missing_role("wrapper bat script"))?,
            wrapper_jar: self.wrapper_jar.ok_or_else(|| missing_role("wrapper jar"))?,
            sample_contract: self.sample_contract,
            solidity_import_path: self.solidity_import_path,
            replacements: self.replacements,
        })
    }
}

fn missing_role(role: &str) -> Error {
    Error::Config(format!("template role '{}' is not set", role))
}
