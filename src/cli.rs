use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(
    name = "farm_advisory_toolbox_cli",
    version,
    about = "Offline farming advisory toolbox"
)]
pub struct Cli {
    /// 언어 코드 (auto/en/hi/gu)
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    pub lang: String,
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// 메뉴 기반 대화형 모드 (기본값)
    Interactive,
    /// 비료 추천량을 한 번 계산한다
    Calc {
        #[arg(long)]
        crop: String,
        #[arg(long, allow_hyphen_values = true)]
        area: String,
        #[arg(long, default_value = "loamy")]
        soil: String,
        /// 입력이 불완전하면 대기 상태 대신 오류로 종료한다
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// 언어 묶음의 키/값을 출력한다
    Strings,
    /// 작물 재배 일정을 출력한다
    Calendar {
        #[arg(long, default_value = "wheat")]
        crop: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["farm_advisory_toolbox_cli"]).expect("parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.lang, "auto");
        assert_eq!(cli.config, PathBuf::from("config.toml"));
    }

    #[test]
    fn calc_keeps_raw_area_text() {
        let cli = Cli::try_parse_from([
            "farm_advisory_toolbox_cli",
            "calc",
            "--crop",
            "rice",
            "--area",
            "abc",
            "--lang",
            "hi",
        ])
        .expect("parse");
        assert_eq!(cli.lang, "hi");
        assert_eq!(
            cli.command,
            Some(Commands::Calc {
                crop: "rice".into(),
                area: "abc".into(),
                soil: "loamy".into(),
                strict: false,
            })
        );
    }
}
