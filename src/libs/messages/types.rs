#[derive(Debug, Clone)]
pub enum Message {
    // === CYCLE MESSAGES ===
    CycleStarted(String, u32), // task, minutes
    CycleInterrupted(String),  // task
    CycleFinished(String),     // task
    NoActiveCycle,
    ActiveCycleStatus {
        task: String,
        minutes_amount: u32,
        elapsed: String,
        remaining: String,
    },
    FinishedCyclePending(String), // task
    CyclesHeader,
    NoCyclesRecorded,

    // === VALIDATION MESSAGES ===
    EmptyTaskName,
    MinutesOutOfRange { minutes: u32, min: u32, max: u32 },
    ConfirmSupersedeActiveCycle(String), // task of the running cycle
    StartAborted,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleTimer,
    PromptDefaultMinutes,
    PromptMinMinutes,
    PromptMaxMinutes,

    // === STATE FILE MESSAGES ===
    StateReadFailed(String),  // io error
    StateParseFailed(String), // serde error
    StateSaveFailed(String),  // io/serde error

    // === WATCH MESSAGES ===
    WatchStarted(String, String), // task, countdown
    WatchNothingToDo,
}
