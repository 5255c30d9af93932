//! Help text.

/// Full help text, printed for `--help`, with no arguments, and after
/// argument errors.
pub const HELP_TEXT: &str = r#"    Commands:
      available Prints commands for buffalo in json format. See: https://gobuffalo.io/en/docs/plugins#writing-a-plugin
      (buffalo generate plugin-template | buffalo-plugin-template plugin-template-generate)
          [ --output (gohome|stdout) ] <buffalo_command> <plugin_name> Generates a new plugin.
      parameters:
        <buffalo_command> is one of commands available in buffalo. Type buffalo --help to list buffalo commands.
        <plugin_name>     [subdirectory/]name of your plugin. The name has to start with "buffalo-"
                          e.g. myNamespace/buffalo-my-plugin will generate plugin at: $GOPATH/src/myNamespace/buffalo-my-plugin
      (buffalo destroy plugin-template | buffalo-plugin-template plugin-template-destroy)
          <plugin_name> Removes the plugin directory from $GOPATH/src.

      Optional flags:
      --help    Prints this help.
      --output  (gohome|stdout) [default: gohome]"#;
