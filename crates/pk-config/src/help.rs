//! Static help text for the interactive `e?` command.

use crate::key::ConfigKey;

/// Help text for `key`, when the key has an entry.
///
/// `patch.code` and `search.quiet` carry no entry; the registry façade
/// degrades the lookup to a logged empty result.
pub fn help_for(key: ConfigKey) -> Option<&'static str> {
    match key {
        ConfigKey::JavaWait => Some("Wait for the Java classloader to be ready (boolean)"),
        ConfigKey::PatchCode => None,
        ConfigKey::SearchIn => Some(
            "Specify which memory ranges to search in, possible values:

    perm:---        filter by permissions (default: 'perm:r--')
    current         search the range containing current offset
    heap            search inside the heap allocated regions
    path:pattern    search ranges mapping paths containing 'pattern'
",
        ),
        ConfigKey::SearchQuiet => None,
        ConfigKey::StalkerEvent => Some(
            "Specify the event to use when stalking, possible values:

    call            trace calls
    ret             trace returns
    exec            trace every instruction
    block           trace basic block execution (every time)
    compile         trace basic blocks once (this is the default)
",
        ),
        ConfigKey::StalkerTimeout => Some(
            "Time after which the stalker gives up (in seconds). Defaults to 5 minutes,
 set to 0 to disable.",
        ),
        ConfigKey::StalkerIn => Some(
            "Restrict stalker results based on where the event has originated:

    raw             stalk everywhere (the default)
    app             stalk only in the app module
    modules         stalk in app module and all linked libraries
",
        ),
        ConfigKey::HookBacktrace => Some(
            "Append the backtrace on each registered trace hook

    true | false    to enable or disable the option
",
        ),
        ConfigKey::HookVerbose => Some(
            "Show trace messages to the console. They are also kept in the trace log

    true | false    to enable or disable the option
",
        ),
        ConfigKey::HookLogs => Some(
            "Save hook trace logs internally in the agent for later listing

    true | false    to enable or disable the option (enabled by default)
",
        ),
        ConfigKey::HookOutput => Some(
            "Choose output format.

    simple | json   (simple by default)
",
        ),
        ConfigKey::FileLog => Some(
            "Set filename to save all the generated tracing logs

    string        specify file path of the log file
",
        ),
        ConfigKey::SymbolsModule => Some(
            "When set ignore offset and use the named module for symbol resolution:

    See the module maps listing to find valid module names
",
        ),
        ConfigKey::SymbolsUnredact => Some(
            "Try to get symbol names from debug symbols when they're \"redacted\":

    true            try to unredact (the default)
    false           do not attempt to unredact
",
        ),
    }
}
