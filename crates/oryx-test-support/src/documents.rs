//! Sample constants sources covering the clean, duplicated, and conflicted cases.

/// A clean source with one collection and Go/C# outputs.
pub const VALID: &str = r#"- name: extVarNames
  constants:
    EnvironmentType: ORYX_ENV_TYPE
    PhpOrigin: PHP_ORIGIN
    DebianFlavor: DEBIAN_FLAVOR
    FpmMaxChildrenEnvVarName: FPM_MAX_CHILDREN
    FpmMaxChildrenSettingName: pm.max_children
    UserDotnetAiVersion: "2.8.42"
  outputs:
    - type: go
      directory: generated/go/consts
      package: consts
    - type: csharp
      directory: generated/csharp
      namespace: Microsoft.Oryx.Common
"#;

/// Two entries share the name `DebianFlavor`.
pub const DUPLICATE_DEBIAN_FLAVOR: &str = r"- name: extVarNames
  constants:
    PhpOrigin: PHP_ORIGIN
    DebianFlavor: DEBIAN_FLAVOR
    FpmConfigurationFile: /usr/local/etc/php-fpm.d/www.conf
    DebianFlavor: DEBIAN_FLAVOR
  outputs:
    - type: go
      directory: generated/go/consts
      package: consts
";

/// Divergent branches left as merge markers around `DebianFlavor` and the PHP-FPM block.
pub const CONFLICTED: &str = r"- name: extVarNames
  constants:
    PhpOrigin: PHP_ORIGIN
<<<<<<< HEAD
    DebianFlavor: DEBIAN_FLAVOR
=======
    FpmConfigurationFile: /usr/local/etc/php-fpm.d/www.conf
    FpmMaxChildrenEnvVarName: FPM_MAX_CHILDREN
>>>>>>> main
    UserAppInsightsKeyEnv: APPINSIGHTS_INSTRUMENTATIONKEY
";
