use std::error::Error;
use std::thread;

use oryx_consts::{ConstantEntry, RegistryError, ext_var_names};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn environment_type_is_bound_to_its_declared_value() -> TestResult {
    assert_eq!(ext_var_names::ENVIRONMENT_TYPE, "ORYX_ENV_TYPE");
    let entry = oryx_consts::lookup("EnvironmentType")?;
    assert_eq!(entry.ident, "ENVIRONMENT_TYPE");
    assert_eq!(entry.collection, "extVarNames");
    assert_eq!(entry.category, "Environment");
    Ok(())
}

#[test]
fn fpm_setting_lookup_and_unknown_name() -> TestResult {
    assert_eq!(oryx_consts::value("FpmMaxChildrenSettingName")?, "pm.max_children");
    let err = oryx_consts::value("DoesNotExist")
        .err()
        .ok_or_else(|| std::io::Error::other("unknown name should not resolve"))?;
    assert_eq!(
        err,
        RegistryError::NotFound {
            name: "DoesNotExist".to_string()
        }
    );
    Ok(())
}

#[test]
fn entries_follow_declaration_order() {
    let names = oryx_consts::entries()
        .iter()
        .map(|entry| entry.name)
        .collect::<Vec<_>>();
    assert_eq!(names.first(), Some(&"EnvironmentType"));
    assert_eq!(names.last(), Some(&"PythonGunicornConfigPathEnvVarName"));
    let debian = names.iter().position(|name| *name == "DebianFlavor");
    let fpm = names.iter().position(|name| *name == "FpmConfigurationFile");
    assert!(debian.is_some() && debian < fpm);
}

#[test]
fn every_entry_resolves_to_itself() {
    for entry in oryx_consts::entries() {
        assert_eq!(oryx_consts::lookup(entry.name), Ok(entry));
    }
}

#[test]
fn concurrent_readers_see_the_same_values() -> TestResult {
    let handles = (0..8)
        .map(|_| {
            thread::spawn(|| {
                oryx_consts::entries()
                    .iter()
                    .map(|entry| oryx_consts::value(entry.name))
                    .collect::<Result<Vec<_>, _>>()
            })
        })
        .collect::<Vec<_>>();
    let expected = oryx_consts::entries()
        .iter()
        .map(|entry| entry.value)
        .collect::<Vec<_>>();
    for handle in handles {
        let values = handle
            .join()
            .map_err(|_| std::io::Error::other("reader thread panicked"))??;
        assert_eq!(values, expected);
    }
    Ok(())
}

#[test]
fn entries_serialize_as_flat_objects() -> TestResult {
    let entry: &ConstantEntry = oryx_consts::lookup("PhpOrigin")?;
    let json = serde_json::to_value(entry)?;
    assert_eq!(json["name"], "PhpOrigin");
    assert_eq!(json["value"], "PHP_ORIGIN");
    assert_eq!(json["category"], "Php");
    Ok(())
}
