use responsys_domain::constants::{
    DOCUMENT_ALREADY_EXISTS, FOLDER_NOT_FOUND, SYSTEM_FOLDER_PREFIX,
};
use responsys_domain::types::requests::{
    CreateDocumentRequest, DocumentRequest, EmptyRequest, FolderRequest, SetDocumentContentRequest,
};
use responsys_domain::{CharacterEncoding, FolderEntry, Locator, Result};
use tracing::{debug, info, warn};

use super::gateway::{decode_bool, decode_list, Operation};
use super::ResponsysClient;
use crate::transport_ports::Transport;

impl<T: Transport> ResponsysClient<T> {
    /// Create a folder. Returns the service's success flag.
    ///
    /// # Errors
    /// `RemoteFault` when the service rejects the call, for example because
    /// the folder already exists.
    pub fn create_folder(&mut self, folder_name: &str) -> Result<bool> {
        let response = self.invoke(Operation::CreateFolder, &FolderRequest { folder_name })?;
        decode_bool(Operation::CreateFolder, &response)
    }

    /// Delete an empty folder.
    ///
    /// # Errors
    /// `RemoteFault` when the folder is missing or not empty.
    pub fn delete_folder(&mut self, folder_name: &str) -> Result<bool> {
        let response = self.invoke(Operation::DeleteFolder, &FolderRequest { folder_name })?;
        decode_bool(Operation::DeleteFolder, &response)
    }

    /// Names of all user folders. System folders (`!`-prefixed) are left
    /// out.
    ///
    /// # Errors
    /// `RemoteFault` when the service rejects the call.
    pub fn list_folders(&mut self) -> Result<Vec<String>> {
        let response = self.invoke(Operation::ListFolders, &EmptyRequest {})?;
        let entries: Vec<FolderEntry> = decode_list(Operation::ListFolders, response)?;

        Ok(entries
            .into_iter()
            .map(|entry| entry.name)
            .filter(|name| !name.starts_with(SYSTEM_FOLDER_PREFIX))
            .collect())
    }

    /// Create a document holding `content`.
    ///
    /// # Errors
    /// `RemoteFault` with code `FOLDER_NOT_FOUND` or
    /// `DOCUMENT_ALREADY_EXISTS` among others. [`Self::save_document`]
    /// recovers from those two.
    pub fn create_document(
        &mut self,
        document: &Locator,
        content: &str,
        character_encoding: CharacterEncoding,
    ) -> Result<bool> {
        let request = CreateDocumentRequest { document, content, character_encoding };
        let response = self.invoke(Operation::CreateDocument, &request)?;
        decode_bool(Operation::CreateDocument, &response)
    }

    /// Replace the content of an existing document.
    ///
    /// # Errors
    /// `RemoteFault` when the document does not exist.
    pub fn set_document_content(&mut self, document: &Locator, content: &str) -> Result<bool> {
        let request = SetDocumentContentRequest { document, content };
        let response = self.invoke(Operation::SetDocumentContent, &request)?;
        decode_bool(Operation::SetDocumentContent, &response)
    }

    /// Delete a document.
    ///
    /// # Errors
    /// `RemoteFault` when the document does not exist.
    pub fn delete_document(&mut self, document: &Locator) -> Result<bool> {
        let response = self.invoke(Operation::DeleteDocument, &DocumentRequest { document })?;
        decode_bool(Operation::DeleteDocument, &response)
    }

    /// Create or overwrite a document, creating its folder when missing.
    ///
    /// Returns `true` only when the document ends up stored. Failures are
    /// not propagated; [`ResponsysClient::last_error`] holds the last
    /// remote fault.
    pub fn save_document(
        &mut self,
        document: &Locator,
        content: &str,
        character_encoding: CharacterEncoding,
    ) -> bool {
        self.save_document_inner(document, content, character_encoding, true)
    }

    fn save_document_inner(
        &mut self,
        document: &Locator,
        content: &str,
        character_encoding: CharacterEncoding,
        allow_recurse: bool,
    ) -> bool {
        let err = match self.create_document(document, content, character_encoding) {
            Ok(created) => return created,
            Err(err) => err,
        };

        match err.code() {
            Some(FOLDER_NOT_FOUND) if allow_recurse => {
                match self.create_folder(&document.folder_name) {
                    Ok(true) => {
                        info!(folder = %document.folder_name, "Created missing document folder");
                        self.save_document_inner(document, content, character_encoding, false)
                    }
                    Ok(false) => {
                        warn!(folder = %document.folder_name, "Folder creation reported failure");
                        false
                    }
                    Err(err) => {
                        warn!(folder = %document.folder_name, error = %err, "Failed to create document folder");
                        false
                    }
                }
            }
            Some(DOCUMENT_ALREADY_EXISTS) => {
                debug!(document = %document, "Document exists, replacing content");
                self.set_document_content(document, content).unwrap_or_else(|err| {
                    warn!(document = %document, error = %err, "Failed to replace document content");
                    false
                })
            }
            _ => {
                warn!(document = %document, error = %err, "Failed to save document");
                false
            }
        }
    }
}
