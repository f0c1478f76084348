const PREFIXES: [&str; 4] = ["~s", "~stat", "~stats", "~statistics"];

/// A chat line asking for statistics: the command name and its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCommand<'a> {
    pub name: &'a str,
    pub args: Vec<&'a str>,
}

impl<'a> StatCommand<'a> {
    /// `None` unless the line starts with one of the statistics commands.
    #[must_use]
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next()?;
        PREFIXES.contains(&name).then(|| Self {
            name,
            args: tokens.collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_all_prefixes() {
        for name in PREFIXES {
            let line = format!("{name} d10 d12");
            let cmd = StatCommand::parse(&line).unwrap();
            assert_eq!(cmd.name, name);
            assert_eq!(cmd.args, ["d10", "d12"]);
        }
    }

    #[test]
    fn ignores_other_commands() {
        assert_eq!(StatCommand::parse("~roll d10 d12"), None);
        assert_eq!(StatCommand::parse("~statsx d6"), None);
        assert_eq!(StatCommand::parse("d6 ~stat"), None);
        assert_eq!(StatCommand::parse(""), None);
    }

    #[test]
    fn forwards_args_verbatim() {
        let cmd = StatCommand::parse("~stat  pd6   athletics D8").unwrap();
        assert_eq!(cmd.args, ["pd6", "athletics", "D8"]);
        assert!(StatCommand::parse("~stat").unwrap().args.is_empty());
    }
}
