// Cached regular expressions for the document grammar

mod cache;
