//! Built-in tools for treesh.
//!
//! These are the only commands the shell knows.

mod cat;
mod cd;
mod cp;
mod echo;
mod exit;
mod find;
mod grep;
mod ln;
mod ls;
mod man;
mod mkdir;
mod mv;
mod pwd;
mod rm;

use super::ToolRegistry;

/// Register all built-in tools with the registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(cat::Cat);
    registry.register(cd::Cd);
    registry.register(cp::Cp);
    registry.register(echo::Echo);
    registry.register(exit::Exit);
    registry.register(find::Find);
    registry.register(grep::Grep);
    registry.register(ln::Ln);
    registry.register(ls::Ls);
    registry.register(man::Man);
    registry.register(mkdir::Mkdir);
    registry.register(mv::Mv);
    registry.register(pwd::Pwd);
    registry.register(rm::Rm);
}
