// src/data/resultcode.rs

//! The MFT result-code catalog: a static mapping of result codes to a
//! short label and a description, and the success rule for transfer
//! statistics.
//!
//! Codes below 100 are command and transfer outcomes; codes 100–122 are
//! resource-monitor outcomes.

use ::phf::phf_map;

/// `(label, description)` for each known MFT result code.
pub static RESULT_CODES: phf::Map<&'static str, (&'static str, &'static str)> = phf_map! {
    "0" => ("Success", "The command was successful"),
    "1" => ("Command unsuccessful", "The command ended unsuccessfully."),
    "2" => ("Command timed out", "The agent did not reply with the status of the command within a specified timeout."),
    "3" => ("Acknowledgement timed out", "The agent did not acknowledge receipt of the command within a specified timeout."),
    "4" => ("Wrong agent", "The command was sent to the wrong agent."),
    "20" => ("Transfer partially successful", "The transfer completed with partial success and some files were transferred."),
    "21" => ("Transfer stopped", "The transfer was stopped by one of the user exits."),
    "22" => ("Cancel transfer timed out", "The agent received a request to cancel a transfer but the cancellation could not be completed within 30 seconds."),
    "26" => ("Cancel ID not found", "The agent received a request to cancel a transfer but the transfer cannot be found."),
    "27" => ("Cancel in progress", "The agent received a request to cancel a transfer, but the transfer is already in the process of being canceled."),
    "40" => ("Failed", "The transfer failed and none of the files specified were transferred."),
    "41" => ("Cancelled", "The transfer was canceled."),
    "42" => ("Trigger failed", "The transfer did not take place because the transfer was conditional and the required condition was not met."),
    "43" => ("Malformed XML", "An XML message was malformed."),
    "44" => ("Source agent capacity exceeded", "The source agent did not have sufficient capacity to carry out the transfer."),
    "45" => ("Destination agent capacity exceeded", "The destination agent did not have sufficient capacity to carry out the transfer."),
    "46" => ("Source agent maximum number of files exceeded", "The number of files being transferred exceeded the limit of the source agent."),
    "47" => ("Destination agent maximum number of files exceeded", "The number of files transferred exceeded the limit of the destination agent."),
    "48" => ("Invalid log message attributes", "A log message is malformed. This error is an internal error."),
    "49" => ("Destination unreachable", "The source agent is unable send a message to the destination agent due to an IBM MQ problem."),
    "50" => ("Trial version violation", "An attempt was made by a trial version agent to communicate with an agent that is not a trial version agent."),
    "51" => ("Source transfer not permitted", "The maxSourceTransfers agent property has been set to 0."),
    "52" => ("Destination transfer not permitted", "The maxDestinationTransfers agent property has been set to 0."),
    "53" => ("Not authorized", "The user is not authorized to perform the operation."),
    "54" => ("Authority levels do not match", "The authorityChecking agent property value of the source agent and destination agent do not match."),
    "55" => ("Trigger not supported", "An attempt has been made to create a transfer with a trigger on a protocol bridge agent."),
    "56" => ("Destination file to message not supported", "The destination agent does not support writing the file to a destination queue"),
    "57" => ("File space not supported", "The destination agent does not support file spaces."),
    "58" => ("File space rejected", "The file space transfer was rejected by the destination agent."),
    "59" => ("Destination message to file not supported", "The destination agent does not support message-to-file transfers."),
    "64" => ("Both queues disallowed", "The source and destination of a transfer is a queue."),
    "65" => ("General data queue error", "An error occurred when the Managed File Transfer Agent data queue was accessed."),
    "66" => ("Data queue put authorization error", "An error occurred when the Managed File Transfer Agent data queue was accessed. Advanced Message Security is not enabled."),
    "67" => ("Data queue put AMS error", "An authorization error occurred when the Managed File Transfer Agent data queue was accessed. Advanced Message Security is enabled."),
    "69" => ("Transfer Recovery Timed out", "Recovery of a transfer timed out after the specified transferRecoveryTimeout value."),
    "70" => ("Agent has ended abnormally", "Application has had an unrecoverable problem and is forcibly terminating."),
    "75" => ("Queue manager is unavailable", "The application cannot continue because the queue manager for the application is unavailable."),
    "78" => ("Problem with the startup configuration", "The application cannot continue because there is a problem with the startup configuration data."),
    "85" => ("Problem with the database server", "The application cannot continue because there is a problem with the database (typically only returned by a logger)"),
    "100" => ("Monitor substitution not valid", "The format of a variable substitution within a monitor task XML script was malformed."),
    "101" => ("Monitor resource incorrect", "The number of monitor resource definitions was not valid."),
    "102" => ("Monitor trigger incorrect", "The number of monitor trigger definitions was not valid."),
    "103" => ("Monitor task incorrect", "The number of monitor task definitions was not valid."),
    "104" => ("Monitor missing", "The requested monitor is not present."),
    "105" => ("Monitor already present", "The requested monitor is already present."),
    "106" => ("Monitor user exit error", "A monitor user exit has generated an error during a resource monitor poll."),
    "107" => ("Monitor user exit canceled", "A monitor user exit has requested a transaction to be canceled."),
    "108" => ("Monitor task failed", "A monitor task has failed to complete due to error in processing the task."),
    "109" => ("Monitor resource failed", "A monitor resource definition cannot be applied to the given resource."),
    "110" => ("Monitor task variable substitution failed", "A variable has been specified in a monitor task but no matching name has been found in the metadata."),
    "111" => ("Monitor task source agent not valid", "The source agent of the monitor transfer task does not match the agent of the resource monitor."),
    "112" => ("Monitor task source queue manager not valid", "The source agent queue manager of the monitor transfer task does not match the agent queue manager of the resource monitor."),
    "113" => ("Monitor not supported", "An attempt has been made to create or delete a resource monitor on a protocol bridge agent."),
    "114" => ("Monitor resource denied", "The directory that is scanned by the monitor resource is denied access."),
    "115" => ("Monitor resource queue in use", "The monitor resource queue is already open, and is not compatible for input with shared access."),
    "116" => ("Monitor resource queue unknown", "The monitor resource queue does not exist on the associated queue manager of the monitor."),
    "118" => ("Monitor resource expression invalid", "An error occurred evaluating the XPath expression."),
    "119" => ("Monitor task source agent queue manager missing", "The source agent name or source agent queue manager name is missing from the monitor task definition."),
    "120" => ("Monitor queue not enabled", "The monitor resource queue is not enabled."),
    "121" => ("Unexpected error when accessing monitor queue", "An unexpected error occurred when accessing the monitor resource queue."),
    "122" => ("Monitor command queue not enabled for context id", "The monitor agent command queue is not enabled for set context identification."),
};

/// Fallback message for result codes not in [`RESULT_CODES`].
pub const RESULT_MESSAGE_UNKNOWN: &str = "Unknown code";

/// `"{label}: {description}"` for a known (trimmed) result code,
/// else [`RESULT_MESSAGE_UNKNOWN`].
pub fn result_message(code: &str) -> String {
    match RESULT_CODES.get(code.trim()) {
        Some((label, description)) => format!("{}: {}", label, description),
        None => RESULT_MESSAGE_UNKNOWN.to_string(),
    }
}

/// The success rule for transfer statistics: a trimmed result code of
/// `"0"` (or the float-rendered `"0.0"` seen in round-tripped data).
pub fn result_code_is_success(code: &str) -> bool {
    matches!(code.trim(), "0" | "0.0")
}
