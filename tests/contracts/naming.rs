//! Naming contracts (NAME-001 through NAME-002)
//!
//! Firmware route handlers derive symbol names from request paths with
//! the same rules; these pin the rules end to end.

use crate::common::*;

/// CONTRACT NAME-001: `symbol` agrees with the symbols `embed` emits.
#[test]
fn contract_symbol_command_matches_generated_header() {
    let env = TestEnv::new();
    let paths = ["index.html", "js/app.min.js", "fonts/Roboto Light.woff2", "2x/logo@2x.png"];
    for path in paths {
        env.write_input(path, path.as_bytes());
    }
    assert!(env.run(&["embed"]).success);
    let header = env.read_output();

    for path in paths {
        let result = env.run(&["symbol", &format!("/{path}")]);
        let line = result.stdout.trim_end();
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(fields.len(), 3, "unexpected output {line:?}");

        assert!(
            header.contains(&format!("const uint8_t {}[] PROGMEM", fields[1])),
            "{} missing from header",
            fields[1]
        );
        assert!(header.contains(&format!("const size_t {} = ", fields[2])));
    }
}

/// CONTRACT NAME-002: The naming version is pinned in every header.
#[test]
fn contract_naming_version_in_header() {
    let env = TestEnv::new();
    assert!(env.run(&["embed"]).success);

    assert!(env
        .read_output()
        .contains(&format!("#define PROGMEM_NAMING_VERSION {}\n", progmem::NAMING_VERSION)));
}
