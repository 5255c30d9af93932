//! Go source of a freshly generated buffalo plugin.
//!
//! Placeholders: `buffalo_command`, `plugin_name`, `handler_name`.

pub const PLUGIN_TEMPLATE: &str = r##"package main

import (
	"encoding/json"
	"fmt"
	"log"
	"os"

	"github.com/gobuffalo/buffalo/plugins"
)

// commandsToJSON encodes the commands advertised by the "available" command,
// which buffalo uses to discover what this plugin provides.
func commandsToJSON(commands plugins.Commands) string {
	encoded, err := json.Marshal(commands)
	if err != nil {
		log.Fatal("Cannot encode to JSON ", err)
	}

	return string(encoded)
}

func printHelp() {
	fmt.Println("{{plugin_name}} options:")
	fmt.Println("  --help    Prints this help.")
	fmt.Println("  available Prints commands for buffalo in json format. See: https://gobuffalo.io/en/docs/plugins#writing-a-plugin")
}

// {{handler_name}} handles: buffalo {{buffalo_command}} {{plugin_name}}
func {{handler_name}}() {
	fmt.Println("Handling: buffalo {{buffalo_command}} {{plugin_name}}. TODO: Write your implementation here.")
}

func main() {
	if len(os.Args) < 2 {
		printHelp()
		return
	}

	var commands = plugins.Commands{
		// Each entry maps "buffalo <BuffaloCommand> <Name> [args...]" to
		// "<this binary> <UseCommand> [args...]". Give commands that share a
		// Name under different BuffaloCommands distinct UseCommands.
		plugins.Command{
			Name:           "{{plugin_name}}",
			UseCommand:     "{{plugin_name}}",
			BuffaloCommand: "{{buffalo_command}}",
			Description:    "Here is command description",
		},
	}

	switch os.Args[1] {
	case "available":
		fmt.Println(commandsToJSON(commands))
	case "--help":
		printHelp()

	// Handle your commands here, keyed by UseCommand.
	case "{{plugin_name}}":
		{{handler_name}}()
	default:
		printHelp()
		log.Fatal("Unexpected argument: [", os.Args[1], "], all arguments: ", os.Args)
	}
}
"##;
