use campus_config::CampusConfig;
use figment::Jail;

#[test]
fn env_overrides_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("CAMPUS_GRADES__SEPARATOR", "|");
        jail.set_env("CAMPUS_INSTRUCTORS__HEADER", "false");
        jail.set_env("CAMPUS_GENERAL__DATA_DIR", "/data/stevens");

        let config = CampusConfig::load().expect("config loads");
        assert_eq!(config.grades.separator, '|');
        assert!(!config.instructors.header);
        assert_eq!(config.general.data_dir, "/data/stevens");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".campus")?;
        jail.create_file(".campus/config.toml", "[store]\npath = \"file.duckdb\"\n")?;
        jail.set_env("CAMPUS_STORE__PATH", "env.duckdb");

        let config = CampusConfig::load().expect("config loads");
        assert_eq!(config.store.path, "env.duckdb");
        Ok(())
    });
}
