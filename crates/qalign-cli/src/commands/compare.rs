use crate::cli::CompareArgs;
use crate::error::Result;
use crate::fetch;
use qalign::core::io::pdb::parse_pdb;
use qalign::core::models::sequence::alpha_carbons;
use qalign::core::scoring::substitution::SubstitutionMatrix;
use qalign::engine::config::CompareConfig;
use qalign::workflows::compare;
use tracing::info;

pub async fn run(args: CompareArgs) -> Result<()> {
    let config = load_config(&args)?;
    let matrix = match &args.matrix {
        Some(path) => SubstitutionMatrix::load(path)?,
        None => SubstitutionMatrix::bundled_blosum62()?,
    };

    let path_a = fetch::resolve_structure(&args.structure_a, &args.dir).await?;
    let path_b = fetch::resolve_structure(&args.structure_b, &args.dir).await?;

    let options = config.parse_options();
    let atoms_a = parse_pdb(&path_a, &options)?;
    let atoms_b = parse_pdb(&path_b, &options)?;
    info!(
        atoms_a = atoms_a.len(),
        atoms_b = atoms_b.len(),
        "Parsed structure files."
    );

    let residues_a = alpha_carbons(&atoms_a);
    let residues_b = alpha_carbons(&atoms_b);

    let comparison = compare::run(&residues_a, &residues_b, &matrix, &config)?;

    println!("{}", comparison.alignment.aligned_a);
    println!("{}", comparison.alignment.ribbon);
    println!("{}", comparison.alignment.aligned_b);
    println!();
    println!(
        "Percent identity: {:.2}%",
        comparison.alignment.percent_identity
    );
    println!("RMSD after superposition: {:.4}", comparison.rmsd);

    comparison.write_report(&args.output)?;
    println!("Result written to {}", args.output.display());
    Ok(())
}

fn load_config(args: &CompareArgs) -> Result<CompareConfig> {
    let mut config = match &args.config {
        Some(path) => CompareConfig::load(path)?,
        None => CompareConfig::default(),
    };
    if let Some(gap_penalty) = args.gap_penalty {
        config.gap_penalty = gap_penalty;
    }
    if let Some(chain) = args.chain {
        config.chain = Some(chain);
    }
    config
        .exclude_residues
        .extend(args.exclude_residues.iter().cloned());
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn compare_args(extra: &[&str]) -> CompareArgs {
        let mut argv = vec!["qalign", "compare", "a.pdb", "b.pdb"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Compare(args) => args,
            _ => panic!("expected compare subcommand"),
        }
    }

    #[test]
    fn cli_overrides_take_precedence_over_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("compare.toml");
        fs::write(&config_path, "gap_penalty = -4\nchain = \"B\"").unwrap();

        let mut args = compare_args(&["--gap-penalty", "-7", "--exclude-residue", "MET"]);
        args.config = Some(config_path);

        let config = load_config(&args).unwrap();
        assert_eq!(config.gap_penalty, -7);
        assert_eq!(config.chain, Some('B'));
        assert_eq!(config.exclude_residues, vec!["MET".to_string()]);
    }

    #[test]
    fn invalid_override_is_rejected_by_validation() {
        let args = compare_args(&["--gap-penalty", "3"]);
        assert!(load_config(&args).is_err());
    }

    #[tokio::test]
    async fn compare_runs_end_to_end_on_local_files() {
        let dir = tempdir().unwrap();
        let structure = "\
ATOM 1 CA ALA A 1 0.0 0.0 0.0
ATOM 2 CA CYS A 2 3.8 0.5 0.1
ATOM 3 CA ASP A 3 7.6 0.9 -0.2
ATOM 4 CA GLU A 4 11.4 0.3 0.4
ATOM 5 CA PHE A 5 15.2 -0.4 0.0
ATOM 6 CA GLY A 6 19.0 0.2 -0.3
";
        let path_a = dir.path().join("a.pdb");
        let path_b = dir.path().join("b.pdb");
        fs::write(&path_a, structure).unwrap();
        fs::write(&path_b, structure).unwrap();

        let output = dir.path().join("result.txt");
        let mut args = compare_args(&[]);
        args.structure_a = path_a.to_string_lossy().to_string();
        args.structure_b = path_b.to_string_lossy().to_string();
        args.output = output.clone();

        run(args).await.unwrap();

        let content = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "ACDEFG");
        assert_eq!(lines[1], "||||||");
        assert_eq!(lines[2], "ACDEFG");
        assert_eq!(lines[3], "1.00 1.00 1.00 1.00 1.00 1.00");
    }
}
