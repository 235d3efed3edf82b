#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),            // description
    TaskDeleted(String),          // description
    TaskCompleted(String),        // description
    TaskUpdated(String),          // description
    TaskAlreadyCompleted(String), // description
    TaskNotTimed(String),         // description
    NoChangesDetected,
    TaskRejected(String), // validation error text

    // === LISTING MESSAGES ===
    TasksHeader(usize),                 // count
    SearchResultsHeader(String, usize), // keyword, count
    NoSearchResults(String),            // keyword
    NoTasks,

    // === SORT MESSAGES ===
    TasksSortedByDueDate,
    TasksSortedByPriority,

    // === CLEAR MESSAGES ===
    ConfirmClearAll(usize), // count
    TasksCleared(usize),    // count

    // === PERSISTENCE MESSAGES ===
    TasksSaved(String),           // path
    TasksLoaded(usize, String),   // count, path
    TasksImported(usize, String), // count, path
    TasksExported(usize, String), // count, path
    NoSavedTasks(String),         // path
    SaveFailed(String),           // error
    LoadFailed(String),           // error
    UsingTasksFile(String),       // path

    // === SESSION MESSAGES ===
    SessionHeader(String), // tasks file
    SessionEnded,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigInvalid(String), // error
    ConfigModuleStorage,
    ConfigModuleBehaviour,

    // === PROMPTS ===
    PromptTaskText,
    PromptEditTaskText,
    PromptDueDate,
    PromptPriority,
    PromptCategory,
    PromptTimeRequired,
    PromptSearchKeyword,
    PromptSelectTask,
    PromptSelectAction,
    PromptTasksFile,
    PromptConfirmClear,
    PromptSelectModules,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
