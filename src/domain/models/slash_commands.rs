#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub struct SlashCommand {
    command: String,
    pub args: Vec<String>,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let mut args = text
            .trim()
            .split(' ')
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        let prefix = args[0].to_string();
        args.remove(0);

        let cmd = SlashCommand {
            command: prefix,
            args,
        };
        if cmd.is_quit()
            || cmd.is_new_session()
            || cmd.is_history()
            || cmd.is_chat()
            || cmd.is_view()
            || cmd.is_analyze()
            || cmd.is_delete()
            || cmd.is_confirm()
            || cmd.is_help()
        {
            return Some(cmd);
        }

        return None;
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_new_session(&self) -> bool {
        return ["/n", "/new"].contains(&self.command.as_str());
    }

    pub fn is_history(&self) -> bool {
        return ["/hist", "/history"].contains(&self.command.as_str());
    }

    pub fn is_chat(&self) -> bool {
        return ["/chat", "/back"].contains(&self.command.as_str());
    }

    pub fn is_view(&self) -> bool {
        return ["/v", "/view"].contains(&self.command.as_str());
    }

    pub fn is_analyze(&self) -> bool {
        return ["/a", "/analyze"].contains(&self.command.as_str());
    }

    pub fn is_delete(&self) -> bool {
        return ["/d", "/delete"].contains(&self.command.as_str());
    }

    pub fn is_confirm(&self) -> bool {
        return ["/confirm"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }
}
